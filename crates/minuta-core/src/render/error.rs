use thiserror::Error;

/// Failures while turning HTML into pixels or pixels into a PDF
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(
        "INVALID_DIMENSIONS: cannot paginate a {width}x{height} px bitmap onto a {page_width}x{page_height} mm page"
    )]
    InvalidDimensions {
        width: f64,
        height: f64,
        page_width: f64,
        page_height: f64,
    },

    #[error("TOO_MANY_PAGES: the document would need {pages} pages (limit {max})")]
    TooManyPages { pages: u64, max: usize },

    #[error("CAPTURE_FAILED: {0}")]
    Capture(String),

    #[error("EMPTY_BITMAP: the captured bitmap has no pixels")]
    EmptyBitmap,

    #[error("ENCODE_FAILED: {0}")]
    Encode(String),

    #[error("PDF_FAILED: {0}")]
    Pdf(String),

    #[error("RENDER_IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Encode(err.to_string())
    }
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
