//! End-to-end tests for the list-tags generator.
//!
//! Each test renders into its own temporary directory, so the suite runs in
//! parallel with plain `cargo test`.

use std::path::{Path, PathBuf};
use std::sync::Once;

use keyvaluetags_codegen::{Generator, Roster};

static INIT: Once = Once::new();

/// Services exercising every override facet plus pure defaults.
pub const SAMPLE_SERVICES: &[&str] = &[
    "acmpca",
    "cloudhsmv2",
    "configservice",
    "dynamodb",
    "elasticbeanstalk",
    "kms",
    "qldb",
    "sfn",
    "ssm",
    "waf",
];

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Build a roster, panicking on invalid input.
#[must_use]
pub fn roster(names: &[&str]) -> Roster {
    Roster::new(names.iter().copied())
        .unwrap_or_else(|e| panic!("invalid test roster {names:?}: {e}"))
}

/// Output path inside `dir`.
#[must_use]
pub fn output_in(dir: &Path) -> PathBuf {
    dir.join("keyvaluetags").join("list_tags_gen.rs")
}

/// Default generator writing into `dir`.
#[must_use]
pub fn generator_in(dir: &Path) -> Generator {
    init_tracing();
    Generator::builder().output(output_in(dir)).build()
}

/// Parse a generated module, panicking with the parser message on failure.
#[must_use]
pub fn parse(source: &str) -> syn::File {
    syn::parse_file(source).unwrap_or_else(|e| panic!("generated module does not parse: {e}"))
}

/// Find a generated function by name.
#[must_use]
pub fn find_fn<'a>(file: &'a syn::File, name: &str) -> Option<&'a syn::ItemFn> {
    file.items.iter().find_map(|item| match item {
        syn::Item::Fn(f) if f.sig.ident == name => Some(f),
        _ => None,
    })
}

mod test_failure;
mod test_generate;
mod test_manifest;
