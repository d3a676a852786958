//! Generator configuration.
//!
//! Values come from defaults, then environment variables, then command-line
//! flags applied by the binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "list_tags_gen.rs";

/// Configuration for one generator run.
///
/// # Examples
///
/// ```
/// use keyvaluetags_codegen::GeneratorConfig;
///
/// let config = GeneratorConfig::builder().strict(true).build();
/// assert_eq!(config.output.to_str(), Some("list_tags_gen.rs"));
/// assert!(config.template.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// File the generated module is written to.
    #[builder(default = PathBuf::from(DEFAULT_OUTPUT))]
    pub output: PathBuf,

    /// Template file replacing the built-in template.
    #[builder(default, setter(strip_option))]
    pub template: Option<PathBuf>,

    /// TOML manifest replacing the built-in service roster.
    #[builder(default, setter(strip_option))]
    pub manifest: Option<PathBuf>,

    /// Fail when override tables mention services outside the roster.
    #[builder(default = false)]
    pub strict: bool,

    /// Compare with the existing output instead of writing it.
    #[builder(default = false)]
    pub check: bool,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LISTTAGS_OUTPUT` | `list_tags_gen.rs` |
    /// | `LISTTAGS_TEMPLATE` | *(built-in)* |
    /// | `LISTTAGS_MANIFEST` | *(built-in roster)* |
    /// | `LISTTAGS_STRICT` | `false` |
    /// | `LISTTAGS_CHECK` | `false` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("LISTTAGS_OUTPUT") {
            config.output = PathBuf::from(v);
        }
        if let Some(v) = lookup("LISTTAGS_TEMPLATE") {
            config.template = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("LISTTAGS_MANIFEST") {
            config.manifest = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("LISTTAGS_STRICT") {
            config.strict = parse_bool(&v);
        }
        if let Some(v) = lookup("LISTTAGS_CHECK") {
            config.check = parse_bool(&v);
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
