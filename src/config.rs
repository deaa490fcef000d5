// config.rs - Extension configuration
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FramegenError, Result};

/// Resource name the model has historically shipped under
pub const DEFAULT_MODEL_FILE: &str = "framegen_model_2050.dat";

/// Configuration passed to install
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramegenConfig {
    /// Model resource, absolute or relative to `model_root`
    pub model_path: PathBuf,
    /// Directory relative model paths are resolved against
    pub model_root: Option<PathBuf>,
}

impl Default for FramegenConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_FILE),
            model_root: None,
        }
    }
}

impl FramegenConfig {
    /// Config pointing at a specific model file
    pub fn with_model_path(path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: path.into(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FramegenError::Config(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FramegenError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    /// Model path with `model_root` applied
    pub fn resolved_model_path(&self) -> PathBuf {
        match &self.model_root {
            Some(root) if self.model_path.is_relative() => root.join(&self.model_path),
            _ => self.model_path.clone(),
        }
    }
}
