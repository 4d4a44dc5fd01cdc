// File: crates/label-core/src/text.rs
// Summary: Text measuring/drawing capability and its Skia-backed implementation.

use std::path::Path;

use skia_safe as skia;

use crate::config::RenderConfig;
use crate::error::LabelError;
use crate::units;

/// Measuring and drawing for a fixed-size font face.
///
/// The layout engine only ever asks for a string's pixel footprint and for
/// the string to be drawn with its top-left corner at a coordinate, so any
/// font backend can stand in here.
pub trait TextPainter {
    /// Pixel footprint (width, height) of `text` as it will be drawn.
    fn measure(&self, text: &str) -> (i32, i32);
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw(&self, canvas: &skia::Canvas, x: i32, y: i32, text: &str);
}

/// Monospaced/tabular families tried when no font file is configured.
const FALLBACK_FAMILIES: &[&str] =
    &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

/// Skia text painter over a single typeface at a fixed pixel size.
///
/// Immutable once built; one shaper may be shared read-only across renders.
pub struct TextShaper {
    font: skia::Font,
    paint: skia::Paint,
    ascent_px: f32,
    line_height_px: i32,
}

impl TextShaper {
    /// Resolve a typeface through the platform font manager.
    pub fn new(pixel_size: i32) -> Result<Self, LabelError> {
        let mgr = skia::FontMgr::default();
        let typeface = FALLBACK_FAMILIES
            .iter()
            .find_map(|family| mgr.match_family_style(family, skia::FontStyle::default()))
            .or_else(|| mgr.legacy_make_typeface(None, skia::FontStyle::default()))
            .ok_or_else(|| {
                LabelError::Configuration("no usable system typeface found".into())
            })?;
        Ok(Self::from_typeface(typeface, pixel_size))
    }

    /// Load a typeface from a font file on disk.
    pub fn from_file(path: &Path, pixel_size: i32) -> Result<Self, LabelError> {
        let bytes = std::fs::read(path).map_err(|e| {
            LabelError::Configuration(format!("cannot read font '{}': {e}", path.display()))
        })?;
        let typeface = skia::FontMgr::default()
            .new_from_data(&bytes, None)
            .ok_or_else(|| {
                LabelError::Configuration(format!("cannot decode font '{}'", path.display()))
            })?;
        Ok(Self::from_typeface(typeface, pixel_size))
    }

    /// Build the shaper a config asks for: explicit font file when set,
    /// platform fallback otherwise, sized to the configured glyph height.
    pub fn for_config(config: &RenderConfig) -> Result<Self, LabelError> {
        let px = units::font_px(config);
        match &config.font_path {
            Some(path) => Self::from_file(path, px),
            None => Self::new(px),
        }
    }

    fn from_typeface(typeface: skia::Typeface, pixel_size: i32) -> Self {
        let mut font = skia::Font::from_typeface(typeface, pixel_size as f32);
        // Aliased glyphs keep the raster strictly black/white.
        font.set_edging(skia::font::Edging::Alias);
        font.set_subpixel(false);

        let (_, metrics) = font.metrics();
        let ascent_px = -metrics.ascent;
        let line_height_px = (metrics.descent - metrics.ascent).ceil() as i32;

        let mut paint = skia::Paint::default();
        paint.set_color(skia::Color::BLACK);
        paint.set_anti_alias(false);

        Self { font, paint, ascent_px, line_height_px }
    }
}

impl TextPainter for TextShaper {
    fn measure(&self, text: &str) -> (i32, i32) {
        let (advance, _) = self.font.measure_str(text, Some(&self.paint));
        (advance.ceil() as i32, self.line_height_px)
    }

    fn draw(&self, canvas: &skia::Canvas, x: i32, y: i32, text: &str) {
        // draw_str anchors at the baseline; shift down by the ascent.
        let baseline = y as f32 + self.ascent_px;
        canvas.draw_str(text, (x as f32, baseline), &self.font, &self.paint);
    }
}
