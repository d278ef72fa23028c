use crate::utils::error::{ConvertError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let shown = path.to_string_lossy();

    if path.as_os_str().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shown.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if shown.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shown.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &Path, allowed_extension: &str) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(allowed_extension) => Ok(()),
        Some(ext) => Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string_lossy().to_string(),
            reason: format!(
                "Unsupported file extension: {}. Expected: {}",
                ext, allowed_extension
            ),
        }),
        None => Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string_lossy().to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_existing_dir(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, path)?;
    if !path.is_dir() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string_lossy().to_string(),
            reason: "Not an existing directory".to_string(),
        });
    }
    Ok(())
}
