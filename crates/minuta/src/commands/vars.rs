//! Vars command - list the placeholders of a template

use super::values::open_session;
use crate::context::load_config;
use crate::output::print_json;
use anyhow::{anyhow, Result};
use colored::Colorize;
use minuta_core::template::Template;
use serde_json::json;
use std::path::Path;

/// Show a template's variables and placeholder issues
///
/// # Exit Code
///
/// Exits 0 even when the template has issues; they are part of the report.
pub fn run(template: &Path, json: bool, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let session = open_session(template, config)?;
    let template = session
        .template()
        .ok_or_else(|| anyhow!("no template loaded"))?;

    if json {
        render_json(template)
    } else {
        render_human(template);
        Ok(())
    }
}

fn render_json(template: &Template) -> Result<()> {
    let issues: Vec<String> = template.issues().iter().map(|i| i.to_string()).collect();
    let output = json!({
        "title": template.title(),
        "act_type": template.act_type(),
        "variables": template.variables(),
        "issues": issues,
    });
    print_json(&serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn render_human(template: &Template) {
    println!(
        "{} {} ({} variables)",
        "→".cyan(),
        template.title(),
        template.variables().len()
    );
    for name in template.variables() {
        println!("  {}", name);
    }

    for issue in template.issues() {
        println!("{} {}", "✗".red(), issue);
    }
    if template.is_blocked() {
        println!(
            "\n{} Fix the placeholders above before generating",
            "!".yellow()
        );
    }
}
