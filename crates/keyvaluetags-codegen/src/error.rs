//! Error types for the list-tags generator.
//!
//! Every failure is terminal for a generation run. Each variant belongs to
//! exactly one pipeline [`Stage`], which the CLI reports alongside the message.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::registry::Facet;

/// Pipeline stage in which an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Roster, manifest, override audit or client type resolution.
    Configuration,
    /// Template parsing or substitution.
    Render,
    /// Parsing and canonical formatting of the rendered source.
    Validate,
    /// Persisting (or checking) the output artifact.
    Write,
}

impl Stage {
    /// Returns the lowercase stage name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Render => "render",
            Self::Validate => "validate",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while generating the list-tags module.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// A roster entry is not a valid service name.
    #[error("invalid service name `{0}` (expected lowercase ASCII letters and digits)")]
    InvalidServiceName(String),

    /// A roster lists the same service twice.
    #[error("duplicate service name `{0}` in roster")]
    DuplicateService(String),

    /// The manifest file could not be read or parsed.
    #[error("invalid manifest {path}: {message}")]
    Manifest {
        /// Manifest location.
        path: PathBuf,
        /// Reader or parser message.
        message: String,
    },

    /// The client type collaborator has no entry for a service.
    #[error("no client type registered for service `{0}`")]
    MissingClientType(String),

    /// Strict mode found override entries for services outside the roster.
    #[error("override entries reference services outside the roster: {}", format_unmatched(.0))]
    UnmatchedOverrides(Vec<(Facet, String)>),

    /// The template could not be parsed or rendered.
    #[error("failed to render template `{template}`: {source}")]
    Render {
        /// Template name.
        template: String,
        /// Underlying Tera error.
        #[source]
        source: tera::Error,
    },

    /// A template file could not be read.
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        /// Template location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The rendered text is not valid Rust.
    #[error("generated source is not valid Rust at {line}:{column}: {message}")]
    Validate {
        /// 1-based line of the offending token.
        line: usize,
        /// 0-based column of the offending token.
        column: usize,
        /// Parser message.
        message: String,
    },

    /// The output artifact could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Output location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Check mode found the artifact missing or different from the rendered text.
    #[error("{path} is out of date; re-run the generator")]
    Stale {
        /// Output location.
        path: PathBuf,
    },
}

impl CodegenError {
    /// The pipeline stage this error belongs to.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidServiceName(_)
            | Self::DuplicateService(_)
            | Self::Manifest { .. }
            | Self::MissingClientType(_)
            | Self::UnmatchedOverrides(_) => Stage::Configuration,
            Self::Render { .. } | Self::TemplateRead { .. } => Stage::Render,
            Self::Validate { .. } => Stage::Validate,
            Self::Io { .. } | Self::Stale { .. } => Stage::Write,
        }
    }
}

fn format_unmatched(entries: &[(Facet, String)]) -> String {
    entries
        .iter()
        .map(|(facet, service)| format!("{facet}:{service}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience result type for generator operations.
pub type CodegenResult<T> = Result<T, CodegenError>;
