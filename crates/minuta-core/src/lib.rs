// Core modules
pub mod config;
pub mod dates;
pub mod editor;
pub mod error;
pub mod pagination;
pub mod pdf;
pub mod record;
pub mod render;
pub mod session;
pub mod synthetic;
pub mod template;

// Re-export commonly used types
pub use error::{MinutaError, Result};
