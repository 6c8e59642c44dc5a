//! Error types for the fallible edges of the crate.
//!
//! The sketch core itself never fails; errors only arise when loading
//! configuration or exporting a rendered frame.

use std::path::PathBuf;

/// Main crate error type
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config JSON was malformed
    #[error("invalid config json: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("invalid config value `{field}`: {reason}")]
    InvalidConfig {
        /// Offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Exported SVG could not be parsed for rasterization
    #[error("svg parse failed: {0}")]
    SvgParse(String),

    /// Pixmap could not be allocated for the requested size
    #[error("cannot allocate {width}x{height} pixmap")]
    Pixmap {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// PNG encoding failed
    #[error("png encode failed: {0}")]
    PngEncode(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SketchError>;
