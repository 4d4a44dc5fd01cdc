// File: crates/label-core/src/render.rs
// Summary: Label layout and rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::chip::{strip_polarity, Chip};
use crate::config::RenderConfig;
use crate::error::LabelError;
use crate::text::{TextPainter, TextShaper};
use crate::units;

/// Finished label raster: black ink on white, plus the dpi it was laid out
/// for. Owned by the caller; persistence format is the caller's concern.
pub struct LabelImage {
    image: skia::Image,
    dpi: u32,
}

impl LabelImage {
    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Print resolution in both axes.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Encode the raster as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, LabelError> {
        #[allow(deprecated)]
        let data = self
            .image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| LabelError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode as PNG and write to `path`, creating parent directories.
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), LabelError> {
        let bytes = self.encode_png()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LabelError::Render(format!("create '{}': {e}", parent.display())))?;
        }
        std::fs::write(path, bytes)
            .map_err(|e| LabelError::Render(format!("write '{}': {e}", path.display())))
    }

    /// Raw RGBA8 pixels as (buffer, width, height, row stride in bytes).
    pub fn to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize), LabelError> {
        let (w, h) = (self.image.width(), self.image.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self
            .image
            .read_pixels(&info, &mut pixels, stride, (0, 0), skia::image::CachingHint::Allow)
        {
            return Err(LabelError::Render("read_pixels failed".into()));
        }
        Ok((pixels, w, h, stride))
    }

    /// Bilevel view: one byte per pixel, 0 = ink, 255 = background.
    /// Every rendered pixel is fully black or fully white, so the threshold
    /// only normalizes the channel layout.
    pub fn to_luma8(&self) -> Result<(Vec<u8>, i32, i32), LabelError> {
        let (pixels, w, h, stride) = self.to_rgba8()?;
        let mut out = Vec::with_capacity(w as usize * h as usize);
        for row in pixels.chunks(stride) {
            for px in row[..w as usize * 4].chunks(4) {
                out.push(if px[0] < 128 { 0 } else { 255 });
            }
        }
        Ok((out, w, h))
    }
}

/// Lay out and render `chip` with the font the config names.
pub fn render_with_config(chip: &Chip, config: &RenderConfig) -> Result<LabelImage, LabelError> {
    let shaper = TextShaper::for_config(config)?;
    render(chip, config, &shaper)
}

/// Lay out and render `chip` onto a fresh canvas.
///
/// One deterministic pass: size the canvas from the package geometry, draw
/// the border and both pin columns in the unrotated frame, rotate 90°
/// counter-clockwise with frame expansion, then overlay the chip name and
/// the pin-1 indent in the rotated frame. Any failure aborts the whole
/// render; a partial canvas is never returned.
pub fn render(
    chip: &Chip,
    config: &RenderConfig,
    text: &dyn TextPainter,
) -> Result<LabelImage, LabelError> {
    config.validate()?;
    if chip.pin_count() % 2 != 0 {
        return Err(LabelError::Precondition(format!(
            "pin count must be even, got {}",
            chip.pin_count()
        )));
    }
    chip.ensure_labeled()?;

    let (width, height) = units::canvas_size(chip.package(), chip.pin_count(), config.dpi);

    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| LabelError::Render(format!("failed to create {width}x{height} surface")))?;
    let canvas = surface.canvas();
    canvas.clear(skia::Color::WHITE);

    if config.border {
        draw_border(canvas, width, height);
    }
    draw_pins(canvas, chip, config, text, width, height)?;

    let upright = surface.image_snapshot();
    let mut rotated = rotate_ccw(&upright)?;
    let canvas = rotated.canvas();

    // The rotated frame is as tall as the unrotated frame was wide.
    draw_chip_name(canvas, chip, config, text, upright.width());
    draw_chip_indent(canvas, config, upright.width());

    Ok(LabelImage { image: rotated.image_snapshot(), dpi: config.dpi })
}

// ---- drawing steps ----------------------------------------------------------

/// Single-pixel outline over the full canvas.
fn draw_border(canvas: &skia::Canvas, width: i32, height: i32) {
    let paint = ink_stroke();
    // Half-pixel inset centers the 1px stroke on the outermost rows/columns.
    let rect = skia::Rect::from_ltrb(0.5, 0.5, width as f32 - 0.5, height as f32 - 0.5);
    canvas.draw_rect(rect, &paint);
}

/// Draw both pin columns in the unrotated frame.
///
/// A single running pin counter walks column-major (column outer, row
/// inner): column 0 top-to-bottom, then column 1 at vertically mirrored row
/// coordinates. This matches the package silhouette being reproduced and is
/// intentionally not the counter-clockwise DIP numbering.
fn draw_pins(
    canvas: &skia::Canvas,
    chip: &Chip,
    config: &RenderConfig,
    text: &dyn TextPainter,
    width: i32,
    height: i32,
) -> Result<(), LabelError> {
    let rows = chip.pin_count() / 2;
    let padding = if config.border { 2 } else { 0 };
    let overline = ink_stroke();

    let mut pin = 1;
    for col in 0..2 {
        for row in 0..rows {
            let mut y = units::pin_row_y(chip.package().pin_spacing_mm, row, config.dpi);
            if col == 1 {
                y = height - y;
            }
            let label = chip
                .pin(pin)
                .ok_or_else(|| LabelError::Precondition(format!("pin {pin} has no label")))?;
            let (name, inverted) = strip_polarity(label);
            let (text_w, text_h) = text.measure(name);
            let offset_y = (text_h + 1) / 2;
            let x = if col == 1 { width - text_w - padding } else { padding };
            text.draw(canvas, x, y - offset_y, name);
            if inverted {
                // Active-low strike directly above the glyphs.
                hline(canvas, x, x + text_w, y - offset_y, &overline);
            }
            pin += 1;
        }
    }
    Ok(())
}

/// Rotate 90° counter-clockwise onto an expanded frame (no cropping).
fn rotate_ccw(image: &skia::Image) -> Result<skia::Surface, LabelError> {
    let (w, h) = (image.width(), image.height());
    let mut surface = skia::surfaces::raster_n32_premul((h, w))
        .ok_or_else(|| LabelError::Render(format!("failed to create {h}x{w} surface")))?;
    let canvas = surface.canvas();
    canvas.clear(skia::Color::WHITE);
    canvas.save();
    // Maps source (x, y) to destination (y, w - x).
    canvas.translate((0.0, w as f32));
    canvas.rotate(-90.0, None);
    canvas.draw_image(image, (0.0, 0.0), None);
    canvas.restore();
    Ok(surface)
}

/// Chip name + description, vertically centered right of the indent marker.
fn draw_chip_name(
    canvas: &skia::Canvas,
    chip: &Chip,
    config: &RenderConfig,
    text: &dyn TextPainter,
    canvas_h: i32,
) {
    let x0 = (units::indent_px(config) as f64 * 1.2).ceil() as i32;
    let label = format!("{} {}", chip.name(), chip.description());
    let (_, text_h) = text.measure(&label);
    text.draw(canvas, x0, (canvas_h - text_h) / 2, &label);
}

/// D-shaped pin-1 notch at the left edge of the rotated frame: two stubs and
/// a right half-circle, open toward the canvas edge.
fn draw_chip_indent(canvas: &skia::Canvas, config: &RenderConfig, canvas_h: i32) {
    let paint = ink_stroke();
    let indent = units::indent_px(config);
    let x0 = 0;
    let x1 = indent;
    let y0 = (canvas_h - indent) / 2;
    let y1 = y0 + indent;

    hline(canvas, x0, x1 / 2, y0, &paint);
    hline(canvas, x0, x1 / 2, y1, &paint);

    // Arc angles run clockwise from 3 o'clock: 270° start, 180° sweep is the
    // right half of the circle inscribed in the marker box.
    let oval = skia::Rect::from_ltrb(
        x0 as f32 + 0.5,
        y0 as f32 + 0.5,
        x1 as f32 + 0.5,
        y1 as f32 + 0.5,
    );
    canvas.draw_arc(oval, 270.0, 180.0, false, &paint);
}

// ---- helpers ----------------------------------------------------------------

fn ink_stroke() -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(skia::Color::BLACK);
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint
}

/// One-pixel horizontal line with inclusive endpoints, centered on row `y`.
fn hline(canvas: &skia::Canvas, x0: i32, x1: i32, y: i32, paint: &skia::Paint) {
    let yc = y as f32 + 0.5;
    canvas.draw_line((x0 as f32, yc), ((x1 + 1) as f32, yc), paint);
}
