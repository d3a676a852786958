//! End-to-end generation: audit, resolve, render, validate, write.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::client::{AwsSdkClientTypes, ClientTypeLookup};
use crate::config::DEFAULT_OUTPUT;
use crate::error::{CodegenError, CodegenResult};
use crate::registry::OverrideRegistry;
use crate::render::Renderer;
use crate::resolver::{ResolvedSpec, resolve};
use crate::types::Roster;
use crate::validate::format_source;
use crate::writer::{self, Freshness};

/// Where the template text comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The template embedded in this crate.
    #[default]
    Builtin,
    /// In-memory template text.
    Text {
        /// Name used in error messages.
        name: String,
        /// Template text.
        text: String,
    },
    /// A template file on disk.
    File(PathBuf),
}

impl TemplateSource {
    /// Load and parse the template.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the template does not parse.
    pub fn renderer(&self) -> CodegenResult<Renderer> {
        match self {
            Self::Builtin => Renderer::builtin(),
            Self::Text { name, text } => Renderer::new(name, text),
            Self::File(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|source| CodegenError::TemplateRead {
                        path: path.clone(),
                        source,
                    })?;
                Renderer::new(&path.display().to_string(), &text)
            }
        }
    }
}

/// Whether a run writes the artifact or only verifies it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Write the artifact if it differs.
    #[default]
    Write,
    /// Fail if the artifact is missing or differs.
    Check,
}

/// What a successful run did to the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The artifact was created or replaced.
    Written,
    /// The artifact already matched.
    Unchanged,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Artifact location.
    pub output: PathBuf,
    /// Number of generated accessors.
    pub functions: usize,
    /// Size of the canonical module.
    pub bytes: usize,
    /// Effect on the artifact.
    pub outcome: Outcome,
}

/// Generator pipeline with its collaborators.
///
/// # Examples
///
/// ```no_run
/// use keyvaluetags_codegen::{Generator, Roster};
///
/// let roster = Roster::new(["kms", "ssm", "waf"])?;
/// let report = Generator::builder()
///     .output("src/list_tags_gen.rs")
///     .build()
///     .run(&roster)?;
/// assert_eq!(report.functions, 3);
/// # Ok::<(), keyvaluetags_codegen::CodegenError>(())
/// ```
#[derive(TypedBuilder)]
pub struct Generator {
    /// Override tables.
    #[builder(default)]
    registry: OverrideRegistry,

    /// Client type collaborator.
    #[builder(default = Box::new(AwsSdkClientTypes))]
    client_types: Box<dyn ClientTypeLookup>,

    /// Template to render.
    #[builder(default)]
    template: TemplateSource,

    /// Artifact location.
    #[builder(default = PathBuf::from(DEFAULT_OUTPUT), setter(into))]
    output: PathBuf,

    /// Treat override entries outside the roster as an error.
    #[builder(default = false)]
    strict: bool,

    /// Write or check.
    #[builder(default)]
    mode: Mode,
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("template", &self.template)
            .field("output", &self.output)
            .field("strict", &self.strict)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Generator {
    /// Artifact location.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Report override entries that the roster never uses.
    ///
    /// # Errors
    /// Returns [`CodegenError::UnmatchedOverrides`] in strict mode when any exist.
    pub fn audit(&self, roster: &Roster) -> CodegenResult<()> {
        let unmatched = self.registry.unmatched(roster);
        for (facet, service) in &unmatched {
            warn!(%facet, %service, "override entry does not match any service in the roster");
        }
        for service in self.registry.defaulted(roster) {
            debug!(%service, "service uses default names for every facet");
        }
        if self.strict && !unmatched.is_empty() {
            return Err(CodegenError::UnmatchedOverrides(unmatched));
        }
        Ok(())
    }

    /// Resolve the roster into sorted specs.
    ///
    /// # Errors
    /// Returns an error if the client type lookup misses a service.
    pub fn resolve(&self, roster: &Roster) -> CodegenResult<Vec<ResolvedSpec>> {
        resolve(roster.services(), &self.registry, self.client_types.as_ref())
    }

    /// Audit the roster, then resolve it.
    ///
    /// # Errors
    /// Returns the audit error in strict mode, or the first resolution error.
    pub fn audited_specs(&self, roster: &Roster) -> CodegenResult<Vec<ResolvedSpec>> {
        self.audit(roster)?;
        self.resolve(roster)
    }

    /// Produce the canonical module text without touching the filesystem output.
    ///
    /// # Errors
    /// Returns the first configuration, render or validation error.
    pub fn render_document(&self, roster: &Roster) -> CodegenResult<String> {
        let specs = self.audited_specs(roster)?;
        info!(services = specs.len(), "resolved service specs");

        let renderer = self.template.renderer()?;
        let rendered = renderer.render(&specs)?;
        format_source(&rendered)
    }

    /// Run the whole pipeline.
    ///
    /// Nothing is written unless every earlier stage succeeds.
    ///
    /// # Errors
    /// Returns the first error from any stage; check mode also fails when the
    /// artifact is missing or out of date.
    pub fn run(&self, roster: &Roster) -> CodegenResult<GenerationReport> {
        let document = self.render_document(roster)?;
        let freshness = writer::check(&self.output, &document)?;

        let outcome = match (self.mode, freshness) {
            (_, Freshness::Fresh) => Outcome::Unchanged,
            (Mode::Check, Freshness::Stale | Freshness::Missing) => {
                return Err(CodegenError::Stale {
                    path: self.output.clone(),
                });
            }
            (Mode::Write, Freshness::Stale | Freshness::Missing) => {
                writer::write_atomic(&self.output, &document)?;
                Outcome::Written
            }
        };

        info!(
            output = %self.output.display(),
            functions = roster.len(),
            ?outcome,
            "list-tags generation complete"
        );

        Ok(GenerationReport {
            output: self.output.clone(),
            functions: roster.len(),
            bytes: document.len(),
            outcome,
        })
    }
}
