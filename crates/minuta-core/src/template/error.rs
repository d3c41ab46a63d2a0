//! Template error types

use std::fmt;

/// Problems found while scanning a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{{}}` or a placeholder holding only whitespace
    EmptyPlaceholder {
        /// Byte offset of the opening `{{`
        offset: usize,
        /// Line number where the placeholder starts
        line: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::EmptyPlaceholder { offset, line } => {
                write!(
                    f,
                    "Empty placeholder at line {} (byte {}). Give it a name like {{{{nome}}}} or remove it",
                    line, offset
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
