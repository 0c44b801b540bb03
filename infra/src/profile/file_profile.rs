//! Filesystem profile source
//!
//! The document is read on every call so edits are picked up without a
//! restart.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use pa_core::services::qa::ProfileSourceTrait;

use crate::config::ProfileConfig;

/// Profile text stored in a UTF-8 file
#[derive(Debug, Clone)]
pub struct FileProfileSource {
    path: PathBuf,
}

impl FileProfileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &ProfileConfig) -> Self {
        Self::new(&config.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProfileSourceTrait for FileProfileSource {
    async fn load_profile(&self) -> Result<Option<String>, String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => {
                debug!(path = %self.path.display(), bytes = text.len(), "Loaded profile document");
                Ok(Some(text.trim().to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("Failed to read {}: {}", self.source_name(), e)),
        }
    }

    fn source_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
