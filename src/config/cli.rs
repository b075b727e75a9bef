use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Filesystem storage rooted at a working directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn open_read(&self, path: &str) -> Result<Box<dyn Read + Send>> {
        let full_path = self.resolve(path);
        tracing::debug!("Opening {}", full_path.display());

        let file = File::open(&full_path).map_err(|e| EtlError::SourceError {
            path: full_path.display().to_string(),
            source: e,
        })?;
        Ok(Box::new(file))
    }

    fn open_write(&self, path: &str) -> Result<Box<dyn Write + Send>> {
        let full_path = self.resolve(path);
        tracing::debug!("Creating {}", full_path.display());

        let file = File::create(&full_path).map_err(|e| EtlError::OutputError {
            path: full_path.display().to_string(),
            source: e,
        })?;
        Ok(Box::new(file))
    }
}
