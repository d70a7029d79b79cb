//! Error types for the designer.
//!
//! Pointer handling never fails; these cover configuration and start-up.

use thiserror::Error;

/// Errors that can occur outside the pointer-event paths.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// Viewbox with a non-positive or non-finite size
    #[error("invalid viewbox {width}x{height}: both dimensions must be positive")]
    InvalidViewbox {
        /// Requested viewbox width
        width: f32,
        /// Requested viewbox height
        height: f32,
    },

    /// Settings could not be (de)serialized
    #[error("settings JSON error: {0}")]
    Settings(#[from] serde_json::Error),

    /// The browser host page is missing something the app needs
    #[error("web start-up failed: {0}")]
    WebStartup(String),
}

/// Result type alias for designer operations
pub type DesignerResult<T> = Result<T, DesignerError>;
