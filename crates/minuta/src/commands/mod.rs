//! CLI command implementations

pub mod export;
pub mod fill;
pub mod plan;
pub mod values;
pub mod vars;
