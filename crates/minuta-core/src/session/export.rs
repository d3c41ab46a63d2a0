use crate::error::{MinutaError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A finished PDF, not yet written anywhere
#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl ExportedPdf {
    /// Write the PDF into `dir` under its file name, replacing any existing file
    ///
    /// The bytes go to a temporary file in `dir` first and are renamed into
    /// place, so a failed write never leaves a truncated PDF behind.
    pub fn save_in(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let target = dir.join(&self.file_name);

        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(&self.bytes)?;
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(&target)
            .map_err(|e| MinutaError::IoError(e.error))?;

        #[cfg(unix)]
        std::fs::File::open(dir)?.sync_all()?;

        tracing::info!(path = %target.display(), pages = self.page_count, "saved pdf");
        Ok(target)
    }
}
