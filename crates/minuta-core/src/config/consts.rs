//! Default values shared across the workspace

/// Page geometry
pub mod page {
    /// A4 portrait width (mm)
    pub const A4_WIDTH_MM: f64 = 210.0;
    /// A4 portrait height (mm)
    pub const A4_HEIGHT_MM: f64 = 297.0;

    /// US Letter portrait width (mm)
    pub const LETTER_WIDTH_MM: f64 = 215.9;
    /// US Letter portrait height (mm)
    pub const LETTER_HEIGHT_MM: f64 = 279.4;

    /// Points per millimetre (PDF user space unit is 1/72 inch)
    pub const PT_PER_MM: f64 = 72.0 / 25.4;

    /// Device-pixel multiplier handed to the bitmap capture
    pub const DEFAULT_RENDER_SCALE: f32 = 2.0;

    pub const DEFAULT_JPEG_QUALITY: u8 = 92;

    /// Most pages a single export may produce
    pub const MAX_PAGES: usize = 1_000;
}

/// Placeholder substitution
pub mod substitution {
    /// Rendered in place of an empty value
    pub const BLANK_SENTINEL: &str = "__________";

    /// Inline style of the wrapper around every substituted value
    pub const HIGHLIGHT_STYLE: &str = "font-weight: bold;";
}

/// Exported file naming
pub mod output {
    pub const FILE_PREFIX: &str = "Certidao";
    pub const DEFAULT_TITLE: &str = "documento";
    pub const DEFAULT_ACT_TYPE: &str = "Documento";
}

/// Record post-processing
pub mod records {
    pub const DATE_TOKEN: &str = "data";
    pub const LONG_DATE_SUFFIX: &str = "_extenso";
    pub const TIME_PREFIX: &str = "hora";
    pub const EVENT_TOKENS: &[&str] = &["casamento"];
}

/// Rich-text editor defaults
pub mod editor {
    /// A4 at 96 dpi
    pub const WIDTH_PX: u32 = 794;
    pub const HEIGHT_PX: u32 = 1123;
    pub const BASE_FONT_SIZE: &str = "12pt";
}
