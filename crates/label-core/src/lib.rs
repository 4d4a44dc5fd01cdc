// File: crates/label-core/src/lib.rs
// Summary: Core library entry point; exports chip model, configuration, and label rendering.

pub mod chip;
pub mod config;
pub mod error;
pub mod render;
pub mod text;
pub mod units;

pub use chip::{strip_polarity, Chip, PackageGeometry};
pub use config::RenderConfig;
pub use error::LabelError;
pub use render::{render, render_with_config, LabelImage};
pub use text::{TextPainter, TextShaper};
