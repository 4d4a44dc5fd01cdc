// File: crates/label-core/src/units.rs
// Summary: Millimeter-to-pixel conversion helpers; all conversions round up.

use crate::chip::PackageGeometry;
use crate::config::RenderConfig;

pub const MM_PER_INCH: f64 = 25.4;

/// Convert a physical length to pixels: `ceil(mm * dpi / 25.4)`.
/// Rounding up guarantees physical features never under-allocate and clip.
#[inline]
pub fn mm_to_px(mm: f64, dpi: u32) -> i32 {
    (mm * dpi as f64 / MM_PER_INCH).ceil() as i32
}

/// Vertical center of zero-indexed `row`: rows sit at the midpoint of
/// equal-height slots of one pin pitch, hence the `+ 0.5`.
#[inline]
pub fn pin_row_y(pin_spacing_mm: f64, row: usize, dpi: u32) -> i32 {
    (pin_spacing_mm * (row as f64 + 0.5) * dpi as f64 / MM_PER_INCH).ceil() as i32
}

/// Unrotated canvas size: one row spacing wide, one pin pitch per row tall.
/// Computed in floating point with a single ceiling at the end of each axis.
pub fn canvas_size(package: &PackageGeometry, pin_count: usize, dpi: u32) -> (i32, i32) {
    let width = package.row_spacing_mm * dpi as f64 / MM_PER_INCH;
    let height = (pin_count / 2) as f64 * package.pin_spacing_mm * dpi as f64 / MM_PER_INCH;
    (width.ceil() as i32, height.ceil() as i32)
}

/// Font pixel size for the configured nominal glyph height.
#[inline]
pub fn font_px(config: &RenderConfig) -> i32 {
    mm_to_px(config.font_size_mm, config.dpi)
}

/// Pixel size of the pin-1 indent marker.
#[inline]
pub fn indent_px(config: &RenderConfig) -> i32 {
    mm_to_px(config.indent_size_mm, config.dpi)
}
