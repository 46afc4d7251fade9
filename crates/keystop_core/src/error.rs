//! Error types for keystop_core

use std::fmt;

use thiserror::Error;

/// Which of the two independent stop lists an error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Color,
    Alpha,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Color => f.write_str("color"),
            ChannelKind::Alpha => f.write_str("alpha"),
        }
    }
}

/// Errors produced while building, editing or sampling a gradient
#[derive(Error, Debug)]
pub enum GradientError {
    /// A proposed color, position or opacity failed validation
    #[error("invalid stop: {0}")]
    InvalidStop(String),

    /// A stop list is (or would become) empty
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An edit referenced a stop that does not exist
    #[error("{channel} stop index {index} out of range (len {len})")]
    StopIndex {
        channel: ChannelKind,
        index: usize,
        len: usize,
    },

    /// Canvas width or height above the supported maximum
    #[error("canvas {width}x{height} exceeds the {max}px limit")]
    Dimension { width: u32, height: u32, max: u32 },

    /// A format name that no encoder answers to
    #[error("unknown format '{0}' (expected one of: hex, hex-string, tuple, css)")]
    UnknownFormat(String),

    /// Snapshot JSON could not be read or written
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type for keystop_core operations
pub type Result<T> = std::result::Result<T, GradientError>;
