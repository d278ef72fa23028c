use crate::core::metadata::TEXT_EXTENSION;
use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads inputs from one directory. Relative output paths resolve against it.
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
    fn list_text_files(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() && !entry.path().is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!("Ignoring file with non UTF-8 name: {:?}", entry.file_name());
                continue;
            };
            // Hidden files are not matched by *.txt.
            if name.starts_with('.') || !name.ends_with(TEXT_EXTENSION) {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.base_path.join(name))?;
        Ok(data)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<String> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}
