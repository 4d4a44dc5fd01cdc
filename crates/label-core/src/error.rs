// File: crates/label-core/src/error.rs
// Summary: Error taxonomy for label rendering.

use thiserror::Error;

/// Failure modes of a render call. All are fatal to the call; nothing is
/// retried and no partial canvas is ever returned.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Invalid configuration or an unloadable font resource.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The chip descriptor violates a layout precondition.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// A drawing or encoding step failed.
    #[error("render failed: {0}")]
    Render(String),
}
