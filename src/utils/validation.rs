use crate::utils::error::{PkgFlagsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PkgFlagsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PkgFlagsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PkgFlagsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 前綴會被接在 `-` 後面比對單一旗標，不能含空白
pub fn validate_prefix(field_name: &str, prefix: &str) -> Result<()> {
    validate_non_empty_string(field_name, prefix)?;

    if prefix.chars().any(char::is_whitespace) {
        return Err(PkgFlagsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Prefix cannot contain whitespace".to_string(),
        });
    }

    if prefix.starts_with('-') {
        return Err(PkgFlagsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Prefix is given without the leading '-', e.g. 'I' for '-I'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_prefixes(field_name: &str, prefixes: &[String]) -> Result<()> {
    if prefixes.is_empty() {
        return Err(PkgFlagsError::ValidationError {
            message: format!("'{}' must list at least one prefix", field_name),
        });
    }

    for (i, prefix) in prefixes.iter().enumerate() {
        validate_prefix(&format!("{}[{}]", field_name, i), prefix)?;
    }
    Ok(())
}
