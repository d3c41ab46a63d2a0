use super::DocumentConverter;
use crate::error::{MinutaError, Result};

/// ZIP local file header; `.docx` files are ZIP archives
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const UTF8_BOM: &str = "\u{feff}";

/// Accepts templates that are already HTML
///
/// `.docx` uploads need an external converter; they are recognised and
/// rejected with a load error instead of being read as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSource;

impl DocumentConverter for HtmlSource {
    fn convert(&self, bytes: &[u8]) -> Result<String> {
        if bytes.starts_with(ZIP_MAGIC) {
            return Err(MinutaError::TemplateLoad(
                "not a valid document: binary .docx input needs a document converter; provide the template as HTML"
                    .to_string(),
            ));
        }

        let text = std::str::from_utf8(bytes).map_err(|e| {
            MinutaError::TemplateLoad(format!("not a valid document: not UTF-8 text ({})", e))
        })?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

        if text.trim().is_empty() {
            return Err(MinutaError::TemplateLoad(
                "not a valid document: the file is empty".to_string(),
            ));
        }

        Ok(text.to_string())
    }
}
