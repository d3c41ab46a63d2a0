//! Rendering collaborators
//!
//! The core never converts documents or lays out HTML itself. It talks to
//! three collaborators:
//!
//! - [`DocumentConverter`]: uploaded file bytes → HTML template
//! - [`Rasterizer`]: mounts HTML on an off-screen [`RenderSurface`]
//! - [`RenderSurface`]: captures the mounted document as a [`Bitmap`]
//!
//! A surface is an owned value and is released when dropped, on every exit
//! path of an export.

mod error;
mod html;
mod prerendered;

pub use error::RenderError;
pub use html::HtmlSource;
pub use prerendered::{PrerenderedBitmap, PrerenderedSurface};

use crate::error::Result;
use image::RgbaImage;

/// Converts an uploaded document into HTML
pub trait DocumentConverter {
    /// # Errors
    ///
    /// Returns [`crate::MinutaError::TemplateLoad`] when the bytes are not a
    /// document this converter understands.
    fn convert(&self, bytes: &[u8]) -> Result<String>;
}

/// Lays out HTML off-screen at a fixed width
pub trait Rasterizer {
    type Surface: RenderSurface;

    fn mount(&self, html: &str, width_mm: f64) -> std::result::Result<Self::Surface, RenderError>;
}

/// A mounted document that can be captured
pub trait RenderSurface {
    /// Capture the whole document at `scale` device pixels per CSS pixel
    fn rasterize(&mut self, scale: f32) -> std::result::Result<Bitmap, RenderError>;
}

/// Captured pixels of a rendered document
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub pixels: RgbaImage,
}

impl Bitmap {
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyBitmap`] when either dimension is zero.
    pub fn new(pixels: RgbaImage) -> std::result::Result<Self, RenderError> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(RenderError::EmptyBitmap);
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
