//! Per-service naming overrides for the list-tags accessors.
//!
//! AWS services disagree on what their "list tags" operation is called and on
//! the names of its request and response members. Each naming dimension is a
//! [`Facet`] backed by a flat [`OverrideTable`]: an exact-match list of
//! exceptions plus the value used by every other service. Lookups never fail.

use std::fmt;

use crate::types::{Roster, ServiceName};

/// One naming dimension of a list-tags accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    /// Name of the SDK operation that lists tags.
    ListFunctionName,
    /// Request member carrying the resource identifier.
    IdentifierField,
    /// Request member carrying the resource type, when the service needs one.
    ResourceTypeField,
    /// Response member holding the tags, possibly a dotted path.
    OutputTagsField,
}

impl Facet {
    /// All facets, in table order.
    pub const ALL: [Self; 4] = [
        Self::ListFunctionName,
        Self::IdentifierField,
        Self::ResourceTypeField,
        Self::OutputTagsField,
    ];

    /// Returns the snake_case facet name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListFunctionName => "list_function",
            Self::IdentifierField => "identifier_field",
            Self::ResourceTypeField => "resource_type_field",
            Self::OutputTagsField => "output_tags_field",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact-match exceptions for one facet plus the fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideTable {
    /// Facet this table resolves.
    pub facet: Facet,
    /// Value for any service without an entry.
    pub default: &'static str,
    /// `(service, value)` exceptions.
    pub entries: &'static [(&'static str, &'static str)],
}

impl OverrideTable {
    /// Resolve the facet value for `service`.
    #[must_use]
    pub fn lookup(&self, service: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(name, _)| *name == service)
            .map_or(self.default, |(_, value)| *value)
    }

    /// Whether `service` has an explicit entry.
    #[must_use]
    pub fn contains(&self, service: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == service)
    }

    /// Services with an explicit entry, in table order.
    pub fn services(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }
}

/// Default SDK operation used to list tags.
pub const DEFAULT_LIST_FUNCTION: &str = "ListTagsForResource";
/// Default request member carrying the identifier.
pub const DEFAULT_IDENTIFIER_FIELD: &str = "ResourceArn";
/// Default resource type member; empty means the service has none.
pub const DEFAULT_RESOURCE_TYPE_FIELD: &str = "";
/// Default response member holding the tags.
pub const DEFAULT_OUTPUT_TAGS_FIELD: &str = "Tags";

/// Services whose tag listing operation is not `ListTagsForResource`.
pub const LIST_FUNCTION: OverrideTable = OverrideTable {
    facet: Facet::ListFunctionName,
    default: DEFAULT_LIST_FUNCTION,
    entries: &[
        ("acmpca", "ListTags"),
        ("backup", "ListTags"),
        ("cloudhsmv2", "ListTags"),
        ("dax", "ListTags"),
        ("dynamodb", "ListTagsOfResource"),
        ("efs", "DescribeTags"),
        ("elasticsearchservice", "ListTags"),
        ("firehose", "ListTagsForDeliveryStream"),
        ("glue", "GetTags"),
        ("kms", "ListResourceTags"),
        ("lambda", "ListTags"),
        ("mq", "ListTags"),
        ("opsworks", "ListTags"),
        ("redshift", "DescribeTags"),
        ("sagemaker", "ListTags"),
        ("workspaces", "DescribeTags"),
    ],
};

/// Services whose identifier member is not `ResourceArn`.
pub const IDENTIFIER_FIELD: OverrideTable = OverrideTable {
    facet: Facet::IdentifierField,
    default: DEFAULT_IDENTIFIER_FIELD,
    entries: &[
        ("acmpca", "CertificateAuthorityArn"),
        ("athena", "ResourceARN"),
        ("cloudhsmv2", "ResourceId"),
        ("cloudwatch", "ResourceARN"),
        ("cloudwatchevents", "ResourceARN"),
        ("dax", "ResourceName"),
        ("devicefarm", "ResourceARN"),
        ("directoryservice", "ResourceId"),
        ("docdb", "ResourceName"),
        ("efs", "FileSystemId"),
        ("elasticache", "ResourceName"),
        ("elasticsearchservice", "ARN"),
        ("firehose", "DeliveryStreamName"),
        ("fsx", "ResourceARN"),
        ("kinesisanalytics", "ResourceARN"),
        ("kinesisanalyticsv2", "ResourceARN"),
        ("kms", "KeyId"),
        ("lambda", "Resource"),
        ("mediastore", "Resource"),
        ("neptune", "ResourceName"),
        ("organizations", "ResourceId"),
        ("rds", "ResourceName"),
        ("redshift", "ResourceName"),
        ("ssm", "ResourceId"),
        ("storagegateway", "ResourceARN"),
        ("transfer", "Arn"),
        ("workspaces", "ResourceId"),
        ("waf", "ResourceARN"),
    ],
};

/// Services that need a resource type alongside the identifier.
pub const RESOURCE_TYPE_FIELD: OverrideTable = OverrideTable {
    facet: Facet::ResourceTypeField,
    default: DEFAULT_RESOURCE_TYPE_FIELD,
    entries: &[("ssm", "ResourceType")],
};

/// Services whose tags live somewhere other than `Tags` in the response.
pub const OUTPUT_TAGS_FIELD: OverrideTable = OverrideTable {
    facet: Facet::OutputTagsField,
    default: DEFAULT_OUTPUT_TAGS_FIELD,
    entries: &[
        ("waf", "TagInfoForResource.TagList"),
        ("cloudhsmv2", "TagList"),
        ("databasemigrationservice", "TagList"),
        ("docdb", "TagList"),
        ("elasticache", "TagList"),
        ("elasticbeanstalk", "ResourceTags"),
        ("elasticsearchservice", "TagList"),
        ("neptune", "TagList"),
        ("rds", "TagList"),
        ("ssm", "TagList"),
        ("workspaces", "TagList"),
    ],
};

/// The four override tables used to resolve an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideRegistry {
    /// Operation name table.
    pub list_function: OverrideTable,
    /// Identifier member table.
    pub identifier_field: OverrideTable,
    /// Resource type member table.
    pub resource_type_field: OverrideTable,
    /// Response tags member table.
    pub output_tags_field: OverrideTable,
}

impl OverrideRegistry {
    /// The built-in AWS override tables.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            list_function: LIST_FUNCTION,
            identifier_field: IDENTIFIER_FIELD,
            resource_type_field: RESOURCE_TYPE_FIELD,
            output_tags_field: OUTPUT_TAGS_FIELD,
        }
    }

    /// The table backing `facet`.
    #[must_use]
    pub fn table(&self, facet: Facet) -> &OverrideTable {
        match facet {
            Facet::ListFunctionName => &self.list_function,
            Facet::IdentifierField => &self.identifier_field,
            Facet::ResourceTypeField => &self.resource_type_field,
            Facet::OutputTagsField => &self.output_tags_field,
        }
    }

    /// SDK operation that lists tags for `service`.
    #[must_use]
    pub fn list_function(&self, service: &ServiceName) -> &'static str {
        self.list_function.lookup(service.as_str())
    }

    /// Request member carrying the identifier for `service`.
    #[must_use]
    pub fn identifier_field(&self, service: &ServiceName) -> &'static str {
        self.identifier_field.lookup(service.as_str())
    }

    /// Request member carrying the resource type for `service`, or `""`.
    #[must_use]
    pub fn resource_type_field(&self, service: &ServiceName) -> &'static str {
        self.resource_type_field.lookup(service.as_str())
    }

    /// Response member holding the tags for `service`.
    #[must_use]
    pub fn output_tags_field(&self, service: &ServiceName) -> &'static str {
        self.output_tags_field.lookup(service.as_str())
    }

    /// Override entries whose service is not in `roster`, ordered by facet.
    ///
    /// These entries are never consulted for this roster. They are dead
    /// rather than wrong, so callers decide whether to warn or fail.
    #[must_use]
    pub fn unmatched(&self, roster: &Roster) -> Vec<(Facet, String)> {
        Facet::ALL
            .iter()
            .flat_map(|&facet| {
                self.table(facet)
                    .services()
                    .filter(|service| !roster.contains(service))
                    .map(move |service| (facet, service.to_owned()))
            })
            .collect()
    }

    /// Roster services that have no entry in any table.
    #[must_use]
    pub fn defaulted<'a>(&self, roster: &'a Roster) -> Vec<&'a ServiceName> {
        roster
            .services()
            .iter()
            .filter(|service| {
                Facet::ALL
                    .iter()
                    .all(|&facet| !self.table(facet).contains(service.as_str()))
            })
            .collect()
    }
}

impl Default for OverrideRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
