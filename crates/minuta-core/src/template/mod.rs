//! Template module - placeholder extraction and substitution
//!
//! Templates are HTML documents (typically converted from `.docx`) containing
//! `{{name}}` placeholders.
//!
//! ## Syntax
//!
//! - Placeholder: `{{name}}`, name taken verbatim up to the first `}}`
//! - No nesting: a second `{{` inside an open placeholder restarts it
//! - A placeholder cannot span lines; unclosed ones stay literal text
//! - `{{}}` (or whitespace only) is reported as an issue and blocks generation

pub mod engine;
pub mod error;
pub mod model;

pub use engine::{extract_variables, scan, substitute, Scan};
pub use error::TemplateError;
pub use model::{Template, ValueMapping};
