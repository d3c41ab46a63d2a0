//! Shared session setup for `fill` and `export`

use crate::cli::ValueArgs;
use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use minuta_core::config::Config;
use minuta_core::editor::ExternalEditor;
use minuta_core::record::RecordStore;
use minuta_core::render::HtmlSource;
use minuta_core::session::{EditorUser, TemplateSession};
use minuta_core::synthetic::SyntheticGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// Load `template` into a fresh session, ready for values
pub fn open_session(template: &Path, config: Config) -> Result<TemplateSession> {
    let bytes = std::fs::read(template)
        .with_context(|| format!("failed to read template {}", template.display()))?;
    let file_name = template
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut session = TemplateSession::new(config);
    session.load_template(&HtmlSource, &file_name, &bytes)?;
    Ok(session)
}

/// Apply every value source in `args` to a session on the form view
///
/// Order: synthetic data, then the record lookup, then the values file,
/// then individual `--set` assignments. Later sources win.
pub fn apply_values(session: &mut TemplateSession, args: &ValueArgs) -> Result<()> {
    if args.autofill {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        session.autofill(&SyntheticGenerator::default(), &mut rng)?;
    }

    if let (Some(id), Some(path)) = (&args.record, &args.records) {
        let store = RecordStore::from_file(path)
            .with_context(|| format!("failed to load records {}", path.display()))?;
        session.load_record(&store, id)?;
    }

    if let Some(path) = &args.values {
        for (name, value) in read_values_file(path)? {
            session.set_value(name, value)?;
        }
    }

    for (name, value) in &args.set {
        session.set_value(name.as_str(), value.as_str())?;
    }

    Ok(())
}

/// Revise the generated document in the configured external editor
pub fn edit_document(session: &mut TemplateSession) -> Result<()> {
    let mut editor = ExternalEditor::from_config(&session.config().editor)?;
    let name = std::env::var("USER").unwrap_or_else(|_| "minuta".to_string());
    let user = EditorUser::new(std::process::id(), name);

    if session.edit_with(&mut editor, &user)? {
        eprintln!("{} Document edited in {}", "✓".green(), editor.program());
    } else {
        eprintln!("{} No changes from {}", "→".cyan(), editor.program());
    }
    Ok(())
}

/// Read a flat TOML table of placeholder values
fn read_values_file(path: &Path) -> Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read values {}", path.display()))?;
    let table: toml::Table = toml::from_str(&content)
        .map_err(|e| anyhow!("failed to parse values {}: {}", path.display(), e))?;

    let mut values = Vec::with_capacity(table.len());
    for (name, value) in table {
        let text = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(d) => d.to_string(),
            toml::Value::Array(_) | toml::Value::Table(_) => {
                bail!("value '{}' in {} must be a scalar", name, path.display())
            }
        };
        values.push((name, text));
    }
    Ok(values)
}
