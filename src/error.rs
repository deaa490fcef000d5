//! Error types for the frame-generation extension.
//!
//! Only install-time failures are surfaced. The per-frame path never returns
//! an error to the renderer.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FramegenError {
    /// Install was called on a context that already carries extension state
    /// or a generation hook.
    #[error("frame generation is already installed on this context")]
    AlreadyInstalled,

    #[error("model resource not found: {}", .path.display())]
    ModelNotFound { path: PathBuf },

    #[error("failed to read model resource {}: {source}", .path.display())]
    ModelIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model resource {}: {reason}", .path.display())]
    InvalidModel { path: PathBuf, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FramegenError>;
