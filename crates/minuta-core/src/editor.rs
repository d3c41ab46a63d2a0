//! Rich-text editing collaborator
//!
//! After generation the document belongs to the editor: whatever HTML it
//! reports replaces the substituted output. The session drives an editor
//! through [`RichTextEditor`] and hands it the `[editor]` section of the
//! configuration; implementations use the settings they support.

use crate::config::EditorConfig;
use crate::error::{MinutaError, Result};
use std::io::Write;
use std::process::Command;

/// Presents a document for editing
pub trait RichTextEditor {
    /// Open `html` for editing
    ///
    /// `on_change` receives the full edited HTML every time the user changes
    /// the document. Returning without calling it means nothing changed.
    fn open(
        &mut self,
        html: &str,
        config: &EditorConfig,
        on_change: &mut dyn FnMut(String),
    ) -> Result<()>;
}

/// Runs an external program on a temporary `.html` copy of the document
///
/// The program gets the file path as its last argument and is waited on;
/// the file's contents afterwards are the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalEditor {
    program: String,
    args: Vec<String>,
}

impl ExternalEditor {
    /// Parse a command line such as `"code --wait"`
    pub fn new(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| MinutaError::Editor("editor command is empty".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// `[editor] command`, then `$VISUAL`, then `$EDITOR`
    pub fn from_config(config: &EditorConfig) -> Result<Self> {
        Self::resolve(config, |key| std::env::var(key).ok())
    }

    fn resolve(config: &EditorConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let command = config
            .command
            .clone()
            .or_else(|| env("VISUAL"))
            .or_else(|| env("EDITOR"))
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                MinutaError::Editor(
                    "no editor configured; set [editor] command, $VISUAL or $EDITOR".to_string(),
                )
            })?;
        Self::new(&command)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl RichTextEditor for ExternalEditor {
    fn open(
        &mut self,
        html: &str,
        config: &EditorConfig,
        on_change: &mut dyn FnMut(String),
    ) -> Result<()> {
        let mut file = tempfile::Builder::new()
            .prefix("minuta-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(html.as_bytes())?;
        file.flush()?;

        tracing::debug!(
            program = %self.program,
            file = %file.path().display(),
            width_px = config.width_px,
            "opening external editor"
        );
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(file.path())
            .status()
            .map_err(|e| MinutaError::Editor(format!("failed to run {}: {}", self.program, e)))?;
        if !status.success() {
            return Err(MinutaError::Editor(format!(
                "{} exited with status: {}",
                self.program, status
            )));
        }

        // Editors that save by renaming leave a new file at the same path
        let edited = std::fs::read_to_string(file.path())?;
        if edited != html {
            on_change(edited);
        }
        Ok(())
    }
}
