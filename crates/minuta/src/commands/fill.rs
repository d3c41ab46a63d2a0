//! Fill command - substitute values and write the HTML

use super::values::{apply_values, edit_document, open_session};
use crate::cli::ValueArgs;
use crate::context::load_config;
use crate::output::print_raw;
use anyhow::{Context, Result};
use colored::Colorize;
use minuta_core::MinutaError;
use std::path::Path;

pub fn run(
    template: &Path,
    values: &ValueArgs,
    edit: bool,
    out: Option<&Path>,
    config: Option<&Path>,
) -> Result<()> {
    let config = load_config(config)?;
    let mut session = open_session(template, config)?;
    apply_values(&mut session, values)?;
    session.generate()?;
    if edit {
        edit_document(&mut session)?;
    }
    let document = session.document().ok_or(MinutaError::NoDocument)?;

    match out {
        Some(path) => {
            std::fs::write(path, &document.html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("{} Wrote {}", "✓".green(), path.display());
        }
        None => print_raw(&document.html)?,
    }
    Ok(())
}
