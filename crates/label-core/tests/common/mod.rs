// File: crates/label-core/tests/common/mod.rs
// Purpose: Deterministic fixed-metrics text painter so layout tests never
// depend on installed fonts (text rendering varies across platforms).

use std::cell::RefCell;

use label_core::TextPainter;
use skia_safe as skia;

pub const CHAR_W: i32 = 6;
pub const CHAR_H: i32 = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

/// Measures every glyph as a CHAR_W x CHAR_H cell and records draw calls
/// instead of rasterizing, leaving only engine-drawn primitives on the canvas.
#[derive(Default)]
pub struct GridPainter {
    pub calls: RefCell<Vec<DrawCall>>,
}

impl GridPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }
}

impl TextPainter for GridPainter {
    fn measure(&self, text: &str) -> (i32, i32) {
        (CHAR_W * text.chars().count() as i32, CHAR_H)
    }

    fn draw(&self, _canvas: &skia::Canvas, x: i32, y: i32, text: &str) {
        self.calls.borrow_mut().push(DrawCall { x, y, text: text.to_string() });
    }
}
