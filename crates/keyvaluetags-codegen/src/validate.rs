//! Syntax validation and canonical formatting of rendered source.
//!
//! Rendered text is parsed with `syn` and printed back with `prettyplease`.
//! A template/data mismatch that produces invalid Rust therefore fails the
//! run instead of reaching disk.

use tracing::debug;

use crate::error::{CodegenError, CodegenResult};

/// Parse `source` as a Rust file and return it in canonical formatting.
///
/// Plain `//` comments are dropped by the parser; doc comments survive.
///
/// # Errors
/// Returns [`CodegenError::Validate`] with the position of the first syntax error.
pub fn format_source(source: &str) -> CodegenResult<String> {
    let file = syn::parse_file(source).map_err(|e| {
        let start = e.span().start();
        CodegenError::Validate {
            line: start.line,
            column: start.column,
            message: e.to_string(),
        }
    })?;
    let formatted = prettyplease::unparse(&file);
    debug!(items = file.items.len(), bytes = formatted.len(), "validated generated source");
    Ok(formatted)
}
