use super::consts;
use crate::error::{MinutaError, Result};
use crate::pagination::PageSize;
use serde::{Deserialize, Serialize};

/// minuta.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub substitution: SubstitutionConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub records: RecordConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    A4,
    Letter,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_format")]
    pub format: PageFormat,
    /// Only read when `format = "custom"`
    #[serde(default)]
    pub width_mm: Option<f64>,
    /// Only read when `format = "custom"`
    #[serde(default)]
    pub height_mm: Option<f64>,
    #[serde(default = "default_render_scale")]
    pub render_scale: f32,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            format: default_page_format(),
            width_mm: None,
            height_mm: None,
            render_scale: default_render_scale(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl PageConfig {
    /// Resolve the physical output page size
    pub fn page_size(&self) -> Result<PageSize> {
        match self.format {
            PageFormat::A4 => Ok(PageSize::A4),
            PageFormat::Letter => Ok(PageSize::LETTER),
            PageFormat::Custom => {
                let width = self.width_mm.ok_or_else(|| MinutaError::ConfigInvalidValue {
                    field: "page.width_mm".to_string(),
                    reason: "required when format = \"custom\"".to_string(),
                })?;
                let height = self.height_mm.ok_or_else(|| MinutaError::ConfigInvalidValue {
                    field: "page.height_mm".to_string(),
                    reason: "required when format = \"custom\"".to_string(),
                })?;
                if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
                    return Err(MinutaError::ConfigInvalidValue {
                        field: "page".to_string(),
                        reason: format!("page size must be positive, got {}x{} mm", width, height),
                    });
                }
                Ok(PageSize::new(width, height))
            }
        }
    }
}

fn default_page_format() -> PageFormat {
    PageFormat::A4
}

fn default_render_scale() -> f32 {
    consts::page::DEFAULT_RENDER_SCALE
}

fn default_jpeg_quality() -> u8 {
    consts::page::DEFAULT_JPEG_QUALITY
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
    #[serde(default = "default_highlight_style")]
    pub highlight_style: String,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            highlight_style: default_highlight_style(),
        }
    }
}

fn default_sentinel() -> String {
    consts::substitution::BLANK_SENTINEL.to_string()
}

fn default_highlight_style() -> String {
    consts::substitution::HIGHLIGHT_STYLE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default = "default_title")]
    pub default_title: String,
    #[serde(default = "default_act_type")]
    pub act_type: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            default_title: default_title(),
            act_type: default_act_type(),
        }
    }
}

fn default_file_prefix() -> String {
    consts::output::FILE_PREFIX.to_string()
}

fn default_title() -> String {
    consts::output::DEFAULT_TITLE.to_string()
}

fn default_act_type() -> String {
    consts::output::DEFAULT_ACT_TYPE.to_string()
}

/// Rules applied to records returned by a lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Keys containing this token hold dates
    #[serde(default = "default_date_token")]
    pub date_token: String,
    #[serde(default = "default_long_date_suffix")]
    pub long_date_suffix: String,
    #[serde(default = "default_time_prefix")]
    pub time_prefix: String,
    /// Keys containing one of these derive `<time_prefix>_<event>`
    #[serde(default = "default_event_tokens")]
    pub event_tokens: Vec<String>,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            date_token: default_date_token(),
            long_date_suffix: default_long_date_suffix(),
            time_prefix: default_time_prefix(),
            event_tokens: default_event_tokens(),
        }
    }
}

fn default_date_token() -> String {
    consts::records::DATE_TOKEN.to_string()
}

fn default_long_date_suffix() -> String {
    consts::records::LONG_DATE_SUFFIX.to_string()
}

fn default_time_prefix() -> String {
    consts::records::TIME_PREFIX.to_string()
}

fn default_event_tokens() -> Vec<String> {
    consts::records::EVENT_TOKENS
        .iter()
        .map(|t| t.to_string())
        .collect()
}

/// Configuration handed to the rich-text editing collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_editor_width")]
    pub width_px: u32,
    #[serde(default = "default_editor_height")]
    pub height_px: u32,
    #[serde(default = "default_toolbar")]
    pub toolbar: Vec<String>,
    #[serde(default = "default_font_sizes")]
    pub font_sizes: Vec<String>,
    #[serde(default = "default_font_families")]
    pub font_families: Vec<FontFamily>,
    #[serde(default = "default_base_font_size")]
    pub base_font_size: String,
    #[serde(default = "default_true")]
    pub spellcheck: bool,
    /// Program for [`ExternalEditor`](crate::editor::ExternalEditor), e.g.
    /// `"code --wait"`; `$VISUAL` or `$EDITOR` when unset
    #[serde(default)]
    pub command: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontFamily {
    pub label: String,
    pub stack: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width_px: default_editor_width(),
            height_px: default_editor_height(),
            toolbar: default_toolbar(),
            font_sizes: default_font_sizes(),
            font_families: default_font_families(),
            base_font_size: default_base_font_size(),
            spellcheck: true,
            command: None,
        }
    }
}

fn default_editor_width() -> u32 {
    consts::editor::WIDTH_PX
}

fn default_editor_height() -> u32 {
    consts::editor::HEIGHT_PX
}

fn default_toolbar() -> Vec<String> {
    [
        "undo", "redo", "formatselect", "fontfamily", "fontsize", "link", "bold", "italic",
        "forecolor", "underline", "align", "bullist", "numlist", "outdent", "indent",
        "removeformat", "preview", "fullscreen", "searchreplace", "code", "charmap",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_font_sizes() -> Vec<String> {
    [4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36]
        .iter()
        .map(|pt| format!("{}pt", pt))
        .collect()
}

fn default_font_families() -> Vec<FontFamily> {
    [
        ("Times New Roman", "Times New Roman, Times, serif"),
        ("Arial", "Arial, Helvetica, sans-serif"),
        ("Calibri", "Calibri, sans-serif"),
        ("Courier New", "Courier New, Courier, monospace"),
        ("Georgia", "Georgia, serif"),
        ("Verdana", "Verdana, Geneva, sans-serif"),
    ]
    .iter()
    .map(|(label, stack)| FontFamily {
        label: label.to_string(),
        stack: stack.to_string(),
    })
    .collect()
}

fn default_base_font_size() -> String {
    consts::editor::BASE_FONT_SIZE.to_string()
}

fn default_true() -> bool {
    true
}
