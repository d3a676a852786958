//! Tera rendering of the list-tags module.
//!
//! One template renders the whole document from the sorted [`ResolvedSpec`]
//! list. The template sees a single variable, `specs`, and one custom filter,
//! `snake_case`, which maps AWS member names onto Rust identifiers.

use std::collections::HashMap;

use heck::ToSnakeCase;
use tera::{Context, Tera, Value};
use tracing::debug;

use crate::error::{CodegenError, CodegenResult};
use crate::resolver::ResolvedSpec;

/// Name under which the built-in template is registered.
pub const DEFAULT_TEMPLATE_NAME: &str = "list_tags.rs";

/// Built-in template text.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/list_tags.rs.tera");

/// Strict keywords that need a raw identifier when used as a field or function name.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

/// Convert an AWS PascalCase name to a Rust snake_case identifier.
#[must_use]
pub fn to_rust_ident(name: &str) -> String {
    let snake = name.to_snake_case();
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{snake}")
    } else {
        snake
    }
}

fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("snake_case filter expects a string"))?;
    Ok(Value::String(to_rust_ident(s)))
}

/// A parsed template ready to render resolved specs.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
    name: String,
}

impl Renderer {
    /// Parse `text` as a template registered under `name`.
    ///
    /// # Errors
    /// Returns [`CodegenError::Render`] if the template does not parse.
    pub fn new(name: &str, text: &str) -> CodegenResult<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.register_filter("snake_case", snake_case);
        tera.add_raw_template(name, text)
            .map_err(|source| CodegenError::Render {
                template: name.to_owned(),
                source,
            })?;
        Ok(Self {
            tera,
            name: name.to_owned(),
        })
    }

    /// The built-in list-tags template.
    ///
    /// # Errors
    /// Returns [`CodegenError::Render`] if the embedded template does not parse.
    pub fn builtin() -> CodegenResult<Self> {
        Self::new(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE)
    }

    /// Template name used in error messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the document for `specs`, in the given order.
    ///
    /// # Errors
    /// Returns [`CodegenError::Render`] if substitution fails.
    pub fn render(&self, specs: &[ResolvedSpec]) -> CodegenResult<String> {
        let mut context = Context::new();
        context.insert("specs", specs);

        let text = self
            .tera
            .render(&self.name, &context)
            .map_err(|source| CodegenError::Render {
                template: self.name.clone(),
                source,
            })?;
        debug!(template = %self.name, specs = specs.len(), bytes = text.len(), "rendered template");
        Ok(text)
    }
}
