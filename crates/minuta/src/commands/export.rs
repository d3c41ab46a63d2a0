//! Export command - run the full session and save the PDF

use super::values::{apply_values, edit_document, open_session};
use crate::cli::ValueArgs;
use crate::context::load_config;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use minuta_core::render::PrerenderedBitmap;
use serde_json::json;
use std::path::Path;

/// Fill `template`, paginate `bitmap` and write the PDF into `out_dir`
///
/// `bitmap` must be a capture of the filled document at the configured page
/// width, produced by an external renderer.
pub fn run(
    template: &Path,
    bitmap: &Path,
    values: &ValueArgs,
    edit: bool,
    out_dir: &Path,
    json: bool,
    config: Option<&Path>,
) -> Result<()> {
    let config = load_config(config)?;
    let mut session = open_session(template, config)?;
    apply_values(&mut session, values)?;
    session.generate()?;
    if edit {
        edit_document(&mut session)?;
    }

    let pdf = session.export_pdf(&PrerenderedBitmap::new(bitmap))?;
    let path = pdf.save_in(out_dir)?;

    if json {
        let output = json!({
            "path": path.display().to_string(),
            "file_name": pdf.file_name,
            "pages": pdf.page_count,
            "bytes": pdf.bytes.len(),
        });
        print_json(&serde_json::to_string_pretty(&output)?)?;
    } else {
        println!(
            "{} Saved {} ({} page{})",
            "✓".green(),
            path.display(),
            pdf.page_count,
            if pdf.page_count == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
