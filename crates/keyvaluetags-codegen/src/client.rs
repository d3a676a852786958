//! Client type lookup for generated accessors.
//!
//! The generator never talks to AWS. It only needs the Rust path of each
//! service's client handle so the generated signature can name it.

use std::collections::BTreeMap;

use crate::types::ServiceName;

/// Maps a service to the fully qualified type of its SDK client.
pub trait ClientTypeLookup {
    /// Client type for `service`, or `None` if the service is unknown.
    fn client_type(&self, service: &ServiceName) -> Option<String>;
}

impl<F> ClientTypeLookup for F
where
    F: Fn(&ServiceName) -> Option<String>,
{
    fn client_type(&self, service: &ServiceName) -> Option<String> {
        self(service)
    }
}

/// SDK crates whose name differs from the service key.
const SDK_CRATE_EXCEPTIONS: &[(&str, &str)] = &[
    ("configservice", "config"),
    ("databasemigrationservice", "databasemigration"),
    ("directoryservice", "directory"),
    ("elasticsearchservice", "elasticsearch"),
];

/// Client types of the `aws-sdk-*` crates (`aws_sdk_kms::Client`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsSdkClientTypes;

impl AwsSdkClientTypes {
    /// Rust crate name of the SDK for `service`.
    #[must_use]
    pub fn sdk_crate(service: &ServiceName) -> String {
        let suffix = SDK_CRATE_EXCEPTIONS
            .iter()
            .find(|(name, _)| *name == service.as_str())
            .map_or(service.as_str(), |(_, krate)| *krate);
        format!("aws_sdk_{suffix}")
    }
}

impl ClientTypeLookup for AwsSdkClientTypes {
    fn client_type(&self, service: &ServiceName) -> Option<String> {
        Some(format!("{}::Client", Self::sdk_crate(service)))
    }
}

/// Explicit service to client type table, typically from a manifest.
#[derive(Debug, Clone, Default)]
pub struct StaticClientTypes {
    types: BTreeMap<String, String>,
}

impl StaticClientTypes {
    /// Create a table from `(service, client type)` pairs.
    #[must_use]
    pub fn new(types: BTreeMap<String, String>) -> Self {
        Self { types }
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl ClientTypeLookup for StaticClientTypes {
    fn client_type(&self, service: &ServiceName) -> Option<String> {
        self.types.get(service.as_str()).cloned()
    }
}
