use crate::utils::error::{AppError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Extension check for a single file name, compared case-insensitively.
pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<String> = allowed_extensions.iter().map(|e| e.to_lowercase()).collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(&extension.to_lowercase()) => Ok(()),
        Some(extension) => Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store_dir", "./.order-lists").is_ok());
        assert!(validate_path("store_dir", "").is_err());
        assert!(validate_path("store_dir", "   ").is_err());
        assert!(validate_path("store_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["csv", "xlsx", "xls"];
        assert!(validate_file_extension("file", "lists.csv", &allowed).is_ok());
        assert!(validate_file_extension("file", "Lists.XLSX", &allowed).is_ok());
        assert!(validate_file_extension("file", "report.pdf", &allowed).is_err());
        assert!(validate_file_extension("file", "README", &allowed).is_err());
    }
}
