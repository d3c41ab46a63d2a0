//! Template session
//!
//! Drives one document from upload to PDF. The session owns the loaded
//! template, the value mapping and the rendered document; collaborators
//! (converter, record source, generator, rasterizer) are passed into the
//! operation that needs them.
//!
//! Every operation checks the current [`View`] first and leaves the session
//! untouched when it fails.

mod export;
mod view;

pub use export::ExportedPdf;
pub use view::{Action, View};

use crate::config::Config;
use crate::editor::RichTextEditor;
use crate::error::{MinutaError, Result};
use crate::pagination::plan_pages;
use crate::pdf::{output_file_name, write_pdf, PdfOptions};
use crate::record::{normalize_record, RecordSource};
use crate::render::{DocumentConverter, Rasterizer, RenderSurface};
use crate::synthetic::SyntheticGenerator;
use crate::template::{substitute, Template, ValueMapping};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Person editing the generated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorUser {
    pub id: u32,
    pub name: String,
}

impl EditorUser {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The substituted document shown in the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub html: String,
    /// `None` until someone edits the generated text
    pub last_edited_by: Option<EditorUser>,
}

#[derive(Debug, Default)]
pub struct TemplateSession {
    config: Config,
    view: View,
    template: Option<Template>,
    values: ValueMapping,
    document: Option<RenderedDocument>,
}

impl TemplateSession {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn values(&self) -> &ValueMapping {
        &self.values
    }

    pub fn document(&self) -> Option<&RenderedDocument> {
        self.document.as_ref()
    }

    /// Convert an upload into a template and open the form
    ///
    /// The title comes from `file_name`; every discovered variable starts
    /// with an empty value. Templates with placeholder issues still load,
    /// but [`generate`](Self::generate) refuses them.
    pub fn load_template(
        &mut self,
        converter: &dyn DocumentConverter,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<&Template> {
        let next = self.view.transition(Action::LoadTemplate)?;
        let html = converter.convert(bytes)?;

        let template = Template::new(
            Template::title_from_file_name(file_name),
            self.config.output.act_type.clone(),
            html,
        );
        for issue in template.issues() {
            tracing::warn!("{}", issue);
        }
        tracing::info!(
            title = template.title(),
            variables = template.variables().len(),
            "template loaded"
        );

        self.values = template.empty_mapping();
        self.document = None;
        self.view = next;
        Ok(self.template.insert(template))
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.view.transition(Action::EditValues)?;
        self.values.set(name, value);
        Ok(())
    }

    /// Replace every value with a synthetic one
    pub fn autofill(&mut self, generator: &SyntheticGenerator, rng: &mut dyn RngCore) -> Result<()> {
        self.view.transition(Action::EditValues)?;
        let template = self.template.as_ref().ok_or(MinutaError::NoTemplate)?;
        self.values = generator.autofill(template.variables(), rng);
        tracing::info!(values = self.values.len(), "autofilled values");
        Ok(())
    }

    /// Look up a record and merge its normalized fields over the current values
    ///
    /// Returns the number of fields merged. On any error the values are left
    /// as they were.
    pub fn load_record(&mut self, source: &dyn RecordSource, id: &str) -> Result<usize> {
        self.view.transition(Action::EditValues)?;
        let id = id.trim();
        if id.is_empty() {
            return Err(MinutaError::EmptyRecordId);
        }

        let record = source.lookup(id)?;
        let normalized = normalize_record(&record, &self.config.records);
        let merged = normalized.len();
        self.values.merge(normalized);

        tracing::info!(id, fields = merged, "record loaded");
        Ok(merged)
    }

    /// Substitute the current values into the template and open the editor
    pub fn generate(&mut self) -> Result<&RenderedDocument> {
        let next = self.view.transition(Action::Generate)?;
        let template = self.template.as_ref().ok_or(MinutaError::NoTemplate)?;
        if let Some(first) = template.issues().first() {
            return Err(MinutaError::TemplateBlocked {
                count: template.issues().len(),
                first: first.clone(),
            });
        }

        let html = substitute(template.raw_html(), &self.values, &self.config.substitution);
        tracing::info!(bytes = html.len(), "document generated");

        self.view = next;
        Ok(self.document.insert(RenderedDocument {
            html,
            last_edited_by: None,
        }))
    }

    /// Replace the document with the editor's current HTML
    pub fn apply_edit(&mut self, html: impl Into<String>, user: &EditorUser) -> Result<()> {
        self.view.transition(Action::Edit)?;
        let document = self.document.as_mut().ok_or(MinutaError::NoDocument)?;
        document.html = html.into();
        document.last_edited_by = Some(user.clone());
        tracing::debug!(user = %user.name, "document edited");
        Ok(())
    }

    /// Open the document in `editor` with the `[editor]` configuration
    ///
    /// The last HTML the editor reports becomes the document, attributed to
    /// `user`. Returns whether anything changed; if the editor fails, the
    /// document is left as it was.
    pub fn edit_with(
        &mut self,
        editor: &mut dyn RichTextEditor,
        user: &EditorUser,
    ) -> Result<bool> {
        self.view.transition(Action::Edit)?;
        let current = self
            .document
            .as_ref()
            .ok_or(MinutaError::NoDocument)?
            .html
            .clone();

        let mut latest = None;
        editor.open(&current, &self.config.editor, &mut |html: String| {
            latest = Some(html)
        })?;

        match latest {
            Some(html) => {
                self.apply_edit(html, user)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Return to the form; the values are kept
    pub fn back_to_form(&mut self) -> Result<()> {
        self.view = self.view.transition(Action::BackToForm)?;
        Ok(())
    }

    /// Drop the template, values and document
    pub fn start_over(&mut self) {
        self.template = None;
        self.values = ValueMapping::new();
        self.document = None;
        self.view = View::Upload;
        tracing::info!("session reset");
    }

    /// Render the current document and assemble the paginated PDF
    ///
    /// The render surface is released as soon as the capture finishes or
    /// fails. Nothing is written to disk; see [`ExportedPdf::save_in`].
    pub fn export_pdf<R: Rasterizer>(&self, rasterizer: &R) -> Result<ExportedPdf> {
        self.view.transition(Action::Export)?;
        let template = self.template.as_ref().ok_or(MinutaError::NoTemplate)?;
        let document = self.document.as_ref().ok_or(MinutaError::NoDocument)?;
        let page = self.config.page.page_size()?;

        let bitmap = {
            let mut surface = rasterizer.mount(&document.html, page.width)?;
            surface.rasterize(self.config.page.render_scale)?
        };

        let plan = plan_pages(bitmap.width(), bitmap.height(), page)?;
        let title = if template.title().trim().is_empty() {
            self.config.output.default_title.as_str()
        } else {
            template.title()
        };
        let options = PdfOptions {
            title: title.to_string(),
            jpeg_quality: self.config.page.jpeg_quality,
            ..PdfOptions::default()
        };
        let bytes = write_pdf(&bitmap, &plan, &options)?;

        tracing::info!(pages = plan.page_count(), "pdf exported");
        Ok(ExportedPdf {
            file_name: output_file_name(&self.config.output.file_prefix, title),
            bytes,
            page_count: plan.page_count(),
        })
    }
}
