use crate::utils::error::{IconError, Result};
use std::collections::HashSet;

/// Largest edge length accepted for a single icon.
pub const MAX_ICON_SIZE: u32 = 4096;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_sizes(field_name: &str, sizes: &[u32]) -> Result<()> {
    if sizes.is_empty() {
        return Err(IconError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one icon size is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for &size in sizes {
        validate_range(field_name, size, 1, MAX_ICON_SIZE)?;
        if !seen.insert(size) {
            return Err(IconError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: size.to_string(),
                reason: "Duplicate size would overwrite the same file".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_single_char(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() && !c.is_control() => Ok(c),
        _ => Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected exactly one visible character".to_string(),
        }),
    }
}

pub fn validate_file_name_template(field_name: &str, template: &str) -> Result<()> {
    validate_path(field_name, template)?;

    if !template.contains("{size}") {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Template must contain the {size} placeholder".to_string(),
        });
    }

    if template.contains('/') || template.contains('\\') {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Template must be a plain file name; use output.dir for directories"
                .to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sizes() {
        assert!(validate_sizes("sizes", &[16, 32, 48, 128]).is_ok());
        assert!(validate_sizes("sizes", &[]).is_err());
        assert!(validate_sizes("sizes", &[0]).is_err());
        assert!(validate_sizes("sizes", &[MAX_ICON_SIZE + 1]).is_err());
        assert!(validate_sizes("sizes", &[16, 16]).is_err());
    }

    #[test]
    fn test_validate_single_char() {
        assert_eq!(validate_single_char("glyph", "词").unwrap(), '词');
        assert!(validate_single_char("glyph", "").is_err());
        assert!(validate_single_char("glyph", "ab").is_err());
        assert!(validate_single_char("glyph", " ").is_err());
    }

    #[test]
    fn test_validate_file_name_template() {
        assert!(validate_file_name_template("file_name", "icon{size}.png").is_ok());
        assert!(validate_file_name_template("file_name", "icon.png").is_err());
        assert!(validate_file_name_template("file_name", "a/icon{size}.png").is_err());
        assert!(validate_file_name_template("file_name", "").is_err());
    }
}
