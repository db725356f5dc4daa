//! Error types for guide rendering

use std::path::PathBuf;
use thiserror::Error;

/// Errors while resolving the highlight rectangle
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// No target rect has been assigned. Skip drawing this frame and retry.
    #[error("no target rectangle available")]
    InvalidTarget,
}

/// Errors while compositing the mask onto a surface
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositeError {
    /// The erase buffer was sized for a different surface. Callers must
    /// reallocate via `MaskCompositor::prepare` before compositing.
    #[error("erase buffer is {buffer:?} but surface is {surface:?}; reallocate before compositing")]
    StaleBuffer {
        buffer: (u32, u32),
        surface: (u32, u32),
    },

    #[error("surface of {width}x{height} does not match a {len} byte RGBA buffer")]
    SurfaceSize { width: u32, height: u32, len: usize },
}

/// Errors surfaced by a guide frame
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuideError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Composite(#[from] CompositeError),
}

impl GuideError {
    /// True for conditions handled by skipping the frame
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Resolve(ResolveError::InvalidTarget))
    }
}

/// Errors while loading a guide configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read guide config {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse guide config TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
