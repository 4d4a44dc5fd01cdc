// File: crates/label-core/src/config.rs
// Summary: Per-render configuration with print-oriented defaults.

use std::path::PathBuf;

use crate::error::LabelError;

/// Options for one render call. Plain value, immutable for the duration of
/// a render; defaults come from [`Default`] and every field is overridable.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Pixels per inch driving every millimeter conversion.
    pub dpi: u32,
    /// Desired glyph height in mm. Approximate; font sizing is not an exact science.
    pub font_size_mm: f64,
    /// Scale of the pin-1 indent marker, in mm.
    pub indent_size_mm: f64,
    /// Draw a one-pixel outline around the full canvas.
    pub border: bool,
    /// Font file to load. `None` falls back to the platform's monospace face.
    pub font_path: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            font_size_mm: 1.0,
            indent_size_mm: 1.0,
            border: true,
            font_path: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.dpi == 0 {
            return Err(LabelError::Configuration("dpi must be positive".into()));
        }
        if !(self.font_size_mm > 0.0) {
            return Err(LabelError::Configuration(format!(
                "font size must be positive, got {} mm",
                self.font_size_mm
            )));
        }
        if self.indent_size_mm < 0.0 {
            return Err(LabelError::Configuration(format!(
                "indent size must be non-negative, got {} mm",
                self.indent_size_mm
            )));
        }
        Ok(())
    }
}
