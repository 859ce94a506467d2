use crate::core::Storage;
use crate::utils::error::{IconError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes icons into a directory on the local file system.
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
}

impl Storage for LocalStorage {
    fn resolve(&self, name: &str) -> PathBuf {
        // 輸出到目前目錄時只顯示檔名
        if self.base_path.as_os_str().is_empty() || self.base_path == Path::new(".") {
            PathBuf::from(name)
        } else {
            self.base_path.join(name)
        }
    }

    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.resolve(name);
        let write_error = |source| IconError::WriteError {
            path: full_path.clone(),
            source,
        };

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        fs::write(&full_path, data).map_err(write_error)?;
        Ok(full_path)
    }
}
