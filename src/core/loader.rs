use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::blend_model::{BlendModel, ModelHeader};
use crate::error::{FramegenError, Result};
use crate::traits::{InterpolationModel, ModelLoader};

/// Loads blend models from the file system
#[derive(Debug, Clone, Default)]
pub struct FileModelLoader {
    search_root: Option<PathBuf>,
}

impl FileModelLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root` instead of the working directory
    pub fn with_search_root(root: impl Into<PathBuf>) -> Self {
        Self {
            search_root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.search_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ModelLoader for FileModelLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn InterpolationModel>> {
        let path = self.resolve(path);
        debug!("loading model resource {}", path.display());

        let bytes = std::fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => FramegenError::ModelNotFound { path: path.clone() },
            _ => FramegenError::ModelIo {
                path: path.clone(),
                source,
            },
        })?;
        let header = ModelHeader::decode(&bytes, &path)?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "blend".to_string());
        Ok(Box::new(BlendModel::from_header(name, &header)))
    }
}
