//! Resolution of per-service accessor metadata.
//!
//! [`resolve`] turns a list of services into [`ResolvedSpec`] records by
//! combining the override tables with the client type lookup. The output is a
//! pure function of its inputs and is always sorted by service name, so the
//! rendered document does not depend on roster declaration order.

use serde::Serialize;
use tracing::trace;

use crate::client::ClientTypeLookup;
use crate::error::{CodegenError, CodegenResult};
use crate::registry::OverrideRegistry;
use crate::types::ServiceName;

/// Fully resolved naming record for one generated accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSpec {
    /// Service key (`kms`).
    pub key: ServiceName,
    /// Fully qualified client handle type (`aws_sdk_kms::Client`).
    pub client_type: String,
    /// Leading path segment of `client_type` (`aws_sdk_kms`).
    pub sdk_crate: String,
    /// SDK operation listing tags (`ListResourceTags`).
    pub list_function: String,
    /// Request member carrying the identifier (`KeyId`).
    pub identifier_field: String,
    /// Request member carrying the resource type, empty when not applicable.
    pub resource_type_field: String,
    /// Response member holding the tags, possibly dotted (`Outer.Inner`).
    pub output_tags_field: String,
    /// Service key with the first character upper-cased (`Kms`).
    pub title_case_key: String,
}

impl ResolvedSpec {
    /// Whether the accessor takes a resource type argument.
    #[must_use]
    pub fn has_resource_type(&self) -> bool {
        !self.resource_type_field.is_empty()
    }

    /// Response member path split on `.`.
    pub fn output_tags_path(&self) -> impl Iterator<Item = &str> {
        self.output_tags_field.split('.')
    }
}

/// Resolve one spec per service, sorted by service name.
///
/// `services` must not contain duplicates; a duplicate yields two records with
/// the same name and a generated module that does not compile.
///
/// # Errors
/// Returns [`CodegenError::MissingClientType`] for the first service the
/// client type lookup does not know.
pub fn resolve<L>(
    services: &[ServiceName],
    registry: &OverrideRegistry,
    client_types: &L,
) -> CodegenResult<Vec<ResolvedSpec>>
where
    L: ClientTypeLookup + ?Sized,
{
    let mut sorted = services.to_vec();
    sorted.sort();

    sorted
        .into_iter()
        .map(|key| resolve_one(key, registry, client_types))
        .collect()
}

fn resolve_one<L>(
    key: ServiceName,
    registry: &OverrideRegistry,
    client_types: &L,
) -> CodegenResult<ResolvedSpec>
where
    L: ClientTypeLookup + ?Sized,
{
    let client_type = client_types
        .client_type(&key)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| CodegenError::MissingClientType(key.to_string()))?;
    let sdk_crate = client_type
        .split("::")
        .next()
        .unwrap_or_default()
        .to_owned();

    let spec = ResolvedSpec {
        client_type,
        sdk_crate,
        list_function: registry.list_function(&key).to_owned(),
        identifier_field: registry.identifier_field(&key).to_owned(),
        resource_type_field: registry.resource_type_field(&key).to_owned(),
        output_tags_field: registry.output_tags_field(&key).to_owned(),
        title_case_key: key.title_case(),
        key,
    };
    trace!(service = %spec.key, function = %spec.list_function, "resolved spec");
    Ok(spec)
}
