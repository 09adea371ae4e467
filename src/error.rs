//! Error handling for Tessera.
//!
//! Capacity exhaustion and logical no-ops are not errors anywhere in this
//! crate; they are signalled with `bool`/`Option` returns. The error type
//! covers configuration failures, out-of-bounds action steps, and the
//! script-driver boundary.

use thiserror::Error;

/// Result type alias for Tessera operations
pub type Result<T> = std::result::Result<T, TesseraError>;

/// Main error type for Tessera operations
#[derive(Error, Debug)]
pub enum TesseraError {
    // Configuration Errors
    #[error("Unrecognized draw style: {style}")]
    InvalidDrawStyle { style: String },

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    // Application Errors
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    // Script Errors
    #[error("Unknown layer: {name}")]
    UnknownLayer { name: String },

    #[error("Invalid script: {reason}")]
    ScriptError { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TesseraError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            TesseraError::InvalidDrawStyle { .. } => "INVALID_DRAW_STYLE",
            TesseraError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            TesseraError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            TesseraError::UnknownLayer { .. } => "UNKNOWN_LAYER",
            TesseraError::ScriptError { .. } => "SCRIPT_ERROR",
            TesseraError::Io(_) => "IO_ERROR",
            TesseraError::Json(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Configuration errors are fatal to construction; everything else can
    /// be reported and retried by the driver.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            TesseraError::InvalidDrawStyle { .. } | TesseraError::InvalidDimensions { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = TesseraError::InvalidDrawStyle {
            style: "spiral".to_string(),
        };
        assert_eq!(err.error_code(), "INVALID_DRAW_STYLE");

        let err = TesseraError::OutOfBounds {
            x: 9,
            y: 9,
            width: 3,
            height: 3,
        };
        assert_eq!(err.error_code(), "OUT_OF_BOUNDS");
    }

    #[test]
    fn test_recoverability() {
        let config = TesseraError::InvalidDimensions {
            width: 0,
            height: 5,
        };
        assert!(!config.is_recoverable());

        let bounds = TesseraError::OutOfBounds {
            x: 1,
            y: 1,
            width: 1,
            height: 1,
        };
        assert!(bounds.is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = TesseraError::UnknownLayer {
            name: "sparkle".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown layer: sparkle");
    }
}
