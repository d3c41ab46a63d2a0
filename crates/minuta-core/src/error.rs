use crate::render::RenderError;
use crate::session::{Action, View};
use crate::template::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinutaError {
    // Template errors
    #[error("TEMPLATE_LOAD_FAILED: {0}")]
    TemplateLoad(String),

    #[error("TEMPLATE_INVALID: {0}")]
    Template(#[from] TemplateError),

    #[error("TEMPLATE_BLOCKED: {count} placeholder issue(s) must be fixed before generating; first: {first}")]
    TemplateBlocked { count: usize, first: TemplateError },

    #[error("TEMPLATE_MISSING: no template is loaded")]
    NoTemplate,

    #[error("DOCUMENT_MISSING: no document has been generated")]
    NoDocument,

    // Record errors
    #[error("RECORD_ID_EMPTY: a record identifier is required")]
    EmptyRecordId,

    #[error("RECORD_NOT_FOUND: record '{0}' not found")]
    RecordNotFound(String),

    #[error("RECORD_STORE_INVALID: {0}")]
    RecordStoreInvalid(String),

    // Render errors
    #[error("RENDER_FAILED: {0}")]
    Render(#[from] RenderError),

    // Editor errors
    #[error("EDITOR_FAILED: {0}")]
    Editor(String),

    // Session errors
    #[error("INVALID_TRANSITION: cannot {action} from the {from} view")]
    InvalidTransition { from: View, action: Action },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for MinutaError {
    fn from(err: serde_json::Error) -> Self {
        MinutaError::Generic(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, MinutaError>;
