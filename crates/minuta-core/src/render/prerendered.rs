use super::{Bitmap, Rasterizer, RenderError, RenderSurface};
use image::ImageReader;
use std::path::{Path, PathBuf};

/// Rasterizer backed by an image file produced by an external renderer
///
/// The HTML handed to [`Rasterizer::mount`] is not laid out again; the
/// capture is whatever the file holds at capture time. The `scale` passed to
/// [`RenderSurface::rasterize`] is not applied either: the file must already
/// be captured at the configured `render_scale` (page width in CSS pixels
/// times the scale).
#[derive(Debug, Clone)]
pub struct PrerenderedBitmap {
    path: PathBuf,
}

impl PrerenderedBitmap {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Rasterizer for PrerenderedBitmap {
    type Surface = PrerenderedSurface;

    fn mount(&self, html: &str, width_mm: f64) -> Result<Self::Surface, RenderError> {
        if !self.path.is_file() {
            return Err(RenderError::Capture(format!(
                "bitmap '{}' does not exist",
                self.path.display()
            )));
        }
        tracing::debug!(
            bitmap = %self.path.display(),
            html_bytes = html.len(),
            width_mm,
            "mounted prerendered surface"
        );
        Ok(PrerenderedSurface {
            path: self.path.clone(),
        })
    }
}

/// Surface returned by [`PrerenderedBitmap`]
#[derive(Debug)]
pub struct PrerenderedSurface {
    path: PathBuf,
}

impl RenderSurface for PrerenderedSurface {
    fn rasterize(&mut self, scale: f32) -> Result<Bitmap, RenderError> {
        let image = ImageReader::open(&self.path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| {
                RenderError::Capture(format!("cannot decode '{}': {}", self.path.display(), e))
            })?;
        tracing::debug!(
            scale,
            width = image.width(),
            height = image.height(),
            "captured prerendered bitmap"
        );
        Bitmap::new(image.to_rgba8())
    }
}

impl Drop for PrerenderedSurface {
    fn drop(&mut self) {
        tracing::debug!(bitmap = %self.path.display(), "released render surface");
    }
}
