//! Fixed-page pagination
//!
//! A tall bitmap is scaled to the page width and cut into page-height bands.
//! All geometry is in page units (millimetres); pixel rows are only derived
//! at the end, via [`PagePlan::pixel_bands`].

use crate::config::consts;
use crate::render::RenderError;
use serde::Serialize;

/// Physical page size in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub const A4: Self = Self {
        width: consts::page::A4_WIDTH_MM,
        height: consts::page::A4_HEIGHT_MM,
    };

    pub const LETTER: Self = Self {
        width: consts::page::LETTER_WIDTH_MM,
        height: consts::page::LETTER_HEIGHT_MM,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size in PDF points
    pub fn to_points(self) -> (f64, f64) {
        (
            self.width * consts::page::PT_PER_MM,
            self.height * consts::page::PT_PER_MM,
        )
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0
    }
}

/// One vertical band of the scaled image mapped onto one output page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSlice {
    pub index: usize,
    /// Distance from the top of the scaled image to the top of this band
    pub source_y_offset: f64,
    pub source_height: f64,
    pub is_first_page: bool,
}

impl PageSlice {
    /// Vertical position of the image's top edge relative to the page top
    pub fn placement_offset(&self) -> f64 {
        -self.source_y_offset
    }
}

/// Pixel rows of the source bitmap covered by one slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelBand {
    pub y: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagePlan {
    pub page: PageSize,
    pub source_width: u32,
    pub source_height: u32,
    /// Image height once scaled to the page width
    pub scaled_height: f64,
    pub slices: Vec<PageSlice>,
}

impl PagePlan {
    pub fn page_count(&self) -> usize {
        self.slices.len()
    }

    /// Source pixel rows for each slice
    ///
    /// Band edges are rounded from cumulative offsets, so the bands tile
    /// `0..source_height` with no gap or overlap.
    pub fn pixel_bands(&self) -> Vec<PixelBand> {
        let px_per_unit = f64::from(self.source_height) / self.scaled_height;
        let edge = |units: f64| -> u32 {
            let px = (units * px_per_unit).round();
            px.clamp(0.0, f64::from(self.source_height)) as u32
        };

        let last = self.slices.len().saturating_sub(1);
        self.slices
            .iter()
            .map(|slice| {
                let top = edge(slice.source_y_offset);
                let bottom = if slice.index == last {
                    self.source_height
                } else {
                    edge(slice.source_y_offset + slice.source_height)
                };
                PixelBand {
                    y: top,
                    height: bottom.saturating_sub(top),
                }
            })
            .collect()
    }
}

/// Scaled heights within this distance of a page boundary do not start a new page
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Plan the pages for a `src_width` × `src_height` pixel bitmap
///
/// The bitmap is scaled to `page.width`; the number of pages is
/// `ceil(scaled_height / page.height)` and never less than one.
///
/// # Errors
///
/// Returns [`RenderError::InvalidDimensions`] for a zero-sized bitmap or a
/// page that is not strictly positive and finite.
/// Returns [`RenderError::TooManyPages`] when the bitmap would need more than
/// [`consts::page::MAX_PAGES`] pages.
pub fn plan_pages(src_width: u32, src_height: u32, page: PageSize) -> Result<PagePlan, RenderError> {
    if src_width == 0 || src_height == 0 || !page.is_valid() {
        return Err(RenderError::InvalidDimensions {
            width: f64::from(src_width),
            height: f64::from(src_height),
            page_width: page.width,
            page_height: page.height,
        });
    }

    let scaled_height = page.width * f64::from(src_height) / f64::from(src_width);
    let pages = ((scaled_height / page.height) - BOUNDARY_TOLERANCE).ceil().max(1.0);
    if pages > consts::page::MAX_PAGES as f64 {
        return Err(RenderError::TooManyPages {
            pages: pages as u64,
            max: consts::page::MAX_PAGES,
        });
    }
    let pages = pages as usize;

    let slices = (0..pages)
        .map(|index| {
            let offset = index as f64 * page.height;
            PageSlice {
                index,
                source_y_offset: offset,
                source_height: page.height.min(scaled_height - offset),
                is_first_page: index == 0,
            }
        })
        .collect();

    tracing::debug!(
        src_width,
        src_height,
        scaled_height,
        pages,
        "planned pages"
    );

    Ok(PagePlan {
        page,
        source_width: src_width,
        source_height: src_height,
        scaled_height,
        slices,
    })
}
