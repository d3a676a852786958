//! Service name and roster types.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, CodegenResult};

/// Lowercase identifier of one AWS service (e.g. `kms`, `cloudhsmv2`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Create a new service name.
    ///
    /// # Errors
    /// Returns an error unless the name starts with a lowercase ASCII letter
    /// and contains only lowercase ASCII letters and digits.
    pub fn new(name: impl Into<String>) -> CodegenResult<Self> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !valid {
            return Err(CodegenError::InvalidServiceName(name));
        }
        Ok(Self(name))
    }

    /// Get the service name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first character upper-cased (`kms` -> `Kms`).
    #[must_use]
    pub fn title_case(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated, duplicate-free list of services to generate accessors for.
///
/// Declaration order is preserved; the resolver sorts before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    services: Vec<ServiceName>,
}

impl Roster {
    /// Build a roster from raw names.
    ///
    /// # Errors
    /// Returns an error on the first invalid or duplicate name.
    pub fn new<I, S>(names: I) -> CodegenResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let mut services = Vec::new();
        for name in names {
            let service = ServiceName::new(name)?;
            if !seen.insert(service.clone()) {
                return Err(CodegenError::DuplicateService(service.0));
            }
            services.push(service);
        }
        Ok(Self { services })
    }

    /// Services in declaration order.
    #[must_use]
    pub fn services(&self) -> &[ServiceName] {
        &self.services
    }

    /// Whether the roster lists `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.services.iter().any(|s| s.as_str() == name)
    }

    /// Number of services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// On-disk roster description.
///
/// ```toml
/// services = ["kms", "ssm"]
///
/// [client_types]
/// kms = "aws_sdk_kms::Client"
/// ssm = "aws_sdk_ssm::Client"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Service names, in declaration order.
    pub services: Vec<String>,
    /// Explicit client types. When non-empty these replace the AWS SDK lookup.
    #[serde(default)]
    pub client_types: BTreeMap<String, String>,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid manifest.
    pub fn parse(path: &Path, text: &str) -> CodegenResult<Self> {
        toml::from_str(text).map_err(|e| CodegenError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a manifest file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> CodegenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CodegenError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &text)
    }

    /// Validate the service list into a [`Roster`].
    ///
    /// # Errors
    /// Returns an error on invalid or duplicate names.
    pub fn roster(&self) -> CodegenResult<Roster> {
        Roster::new(self.services.iter().cloned())
    }
}
