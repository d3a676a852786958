//! List-tags accessor generator.
//!
//! Renders one `<service>_list_tags` function per AWS service into a single
//! Rust module, validates it, and writes it atomically.
//!
//! # Usage
//!
//! ```text
//! listtags-gen --output aws/internal/keyvaluetags/list_tags_gen.rs
//! listtags-gen --check
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LISTTAGS_OUTPUT` | `list_tags_gen.rs` | Output file |
//! | `LISTTAGS_TEMPLATE` | *(built-in)* | Template file |
//! | `LISTTAGS_MANIFEST` | *(built-in roster)* | TOML roster manifest |
//! | `LISTTAGS_STRICT` | `false` | Fail on override entries outside the roster |
//! | `LISTTAGS_CHECK` | `false` | Verify instead of write |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod roster;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keyvaluetags_codegen::{
    AwsSdkClientTypes, ClientTypeLookup, CodegenError, Generator, GeneratorConfig, Manifest, Mode,
    Outcome, Roster, StaticClientTypes, TemplateSource,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::roster::SERVICE_NAMES;

/// Command-line flags. Each flag overrides its environment variable.
#[derive(Debug, Parser)]
#[command(name = "listtags-gen", version, about)]
struct Cli {
    /// Output file for the generated module.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Template file replacing the built-in template.
    #[arg(long)]
    template: Option<PathBuf>,

    /// TOML manifest replacing the built-in service roster.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Fail when override tables mention services outside the roster.
    #[arg(long)]
    strict: bool,

    /// Verify that the output is up to date instead of writing it.
    #[arg(long)]
    check: bool,

    /// Print the resolved specs as JSON and exit.
    #[arg(long)]
    print_specs: bool,

    /// Log level filter (ignored when `RUST_LOG` is set).
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Apply flags on top of the environment configuration.
    fn merge_into(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.template.is_some() {
            config.template = self.template;
        }
        if self.manifest.is_some() {
            config.manifest = self.manifest;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        config.strict |= self.strict;
        config.check |= self.check;
        config
    }
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Load the roster and client types, from the manifest if one is configured.
fn load_inputs(config: &GeneratorConfig) -> Result<(Roster, Box<dyn ClientTypeLookup>)> {
    let Some(path) = &config.manifest else {
        let roster = Roster::new(SERVICE_NAMES.iter().copied())
            .context("built-in service roster is invalid")?;
        return Ok((roster, Box::new(AwsSdkClientTypes)));
    };

    info!(manifest = %path.display(), "loading service manifest");
    let manifest = Manifest::load(path)?;
    let roster = manifest.roster()?;
    let client_types = StaticClientTypes::new(manifest.client_types);
    if client_types.is_empty() {
        Ok((roster, Box::new(AwsSdkClientTypes)))
    } else {
        Ok((roster, Box::new(client_types)))
    }
}

/// Attach the failing stage to a generator error.
fn stage_error(err: CodegenError) -> anyhow::Error {
    let stage = err.stage();
    error!(%stage, error = %err, "list-tags generation failed");
    anyhow::Error::new(err).context(format!("{stage} stage failed"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let print_specs = cli.print_specs;
    let config = cli.merge_into(GeneratorConfig::from_env());

    init_tracing(&config.log_level)?;

    let (roster, client_types) = load_inputs(&config).map_err(|e| {
        error!(stage = "configuration", error = %e, "failed to load service roster");
        e.context("configuration stage failed")
    })?;

    let template = config
        .template
        .clone()
        .map_or(TemplateSource::Builtin, TemplateSource::File);
    let mode = if config.check { Mode::Check } else { Mode::Write };

    let generator = Generator::builder()
        .client_types(client_types)
        .template(template)
        .output(config.output.clone())
        .strict(config.strict)
        .mode(mode)
        .build();

    if print_specs {
        let specs = generator.audited_specs(&roster).map_err(stage_error)?;
        let json = serde_json::to_string_pretty(&specs).context("failed to serialize specs")?;
        println!("{json}");
        return Ok(());
    }

    info!(
        services = roster.len(),
        output = %generator.output().display(),
        ?mode,
        "generating list-tags accessors"
    );

    let report = generator.run(&roster).map_err(stage_error)?;

    match report.outcome {
        Outcome::Written => info!(
            output = %report.output.display(),
            functions = report.functions,
            bytes = report.bytes,
            "wrote generated module"
        ),
        Outcome::Unchanged => info!(
            output = %report.output.display(),
            "generated module is up to date"
        ),
    }

    Ok(())
}
