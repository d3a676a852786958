//! Generator for the keyvaluetags list-tags accessors.
//!
//! For every service in a roster this crate emits one async function that
//! lists the tags of a resource through the service's AWS SDK client. The
//! services disagree on operation and member names, so each accessor is
//! resolved from a small set of override tables before being rendered through
//! a single Tera template. The rendered module is parsed with `syn` and
//! printed with `prettyplease` before it is written, which makes the output
//! canonical and rejects anything that is not valid Rust.
//!
//! ```text
//! roster -> resolve (sorted) -> render -> validate -> write
//! ```

mod client;
mod config;
mod error;
mod pipeline;
mod registry;
mod render;
mod resolver;
mod types;
mod validate;
mod writer;

pub use client::{AwsSdkClientTypes, ClientTypeLookup, StaticClientTypes};
pub use config::{DEFAULT_OUTPUT, GeneratorConfig};
pub use error::{CodegenError, CodegenResult, Stage};
pub use pipeline::{GenerationReport, Generator, Mode, Outcome, TemplateSource};
pub use registry::{
    DEFAULT_IDENTIFIER_FIELD, DEFAULT_LIST_FUNCTION, DEFAULT_OUTPUT_TAGS_FIELD,
    DEFAULT_RESOURCE_TYPE_FIELD, Facet, OverrideRegistry, OverrideTable,
};
pub use render::{DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_NAME, Renderer, to_rust_ident};
pub use resolver::{ResolvedSpec, resolve};
pub use types::{Manifest, Roster, ServiceName};
pub use validate::format_source;
pub use writer::{Freshness, check, write_atomic};
