use crate::utils::error::{AopError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Bean names follow the lowercase identifier form the component catalog uses
/// (`boy`, `girl`, `gift_shop`).
pub fn validate_bean_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    let mut chars = name.chars();
    let starts_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let rest_ok = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if !starts_ok || !rest_ok {
        return Err(AopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Bean names must start with a lowercase letter and contain only [a-z0-9_]"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(AopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_unique(field_name: &str, values: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(AopError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bean_name() {
        assert!(validate_bean_name("context.scan", "boy").is_ok());
        assert!(validate_bean_name("context.scan", "gift_shop2").is_ok());
        assert!(validate_bean_name("context.scan", "").is_err());
        assert!(validate_bean_name("context.scan", "Boy").is_err());
        assert!(validate_bean_name("context.scan", "2boy").is_err());
        assert!(validate_bean_name("context.scan", "b-oy").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("aspect.log_level", "info", &["info", "debug"]).is_ok());
        assert!(validate_one_of("aspect.log_level", "loud", &["info", "debug"]).is_err());
    }

    #[test]
    fn test_validate_unique() {
        let names = vec!["boy".to_string(), "girl".to_string()];
        assert!(validate_unique("context.scan", &names).is_ok());

        let dup = vec!["boy".to_string(), "boy".to_string()];
        assert!(validate_unique("context.scan", &dup).is_err());
    }
}
