use thiserror::Error;

#[derive(Error, Debug)]
pub enum AopError {
    #[error("No bean named '{name}' is registered")]
    NoSuchBean { name: String },

    #[error("Bean '{name}' is expected to be of type '{expected}' but was '{actual}'")]
    BeanNotOfRequiredType {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("Expected a single bean of type '{type_name}' but found {count}")]
    NoUniqueBean { type_name: String, count: usize },

    #[error("A bean named '{name}' is already registered")]
    DuplicateBean { name: String },

    #[error("Unknown component '{name}' in scan list (known: {known})")]
    UnknownComponent { name: String, known: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AopError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Wiring,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AopError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AopError::NoSuchBean { .. }
            | AopError::BeanNotOfRequiredType { .. }
            | AopError::NoUniqueBean { .. } => ErrorCategory::Lookup,
            AopError::DuplicateBean { .. } | AopError::UnknownComponent { .. } => {
                ErrorCategory::Wiring
            }
            AopError::ConfigValidationError { .. } | AopError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AopError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup | ErrorCategory::Wiring => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a startup failure carrying this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AopError::NoSuchBean { name } => format!("容器中找不到名為 '{}' 的 bean", name),
            AopError::BeanNotOfRequiredType { name, expected, .. } => {
                format!("bean '{}' 無法作為 {} 取得", name, expected)
            }
            AopError::NoUniqueBean { type_name, count } => {
                format!("類型 {} 對應 {} 個 bean，無法唯一解析", type_name, count)
            }
            AopError::DuplicateBean { name } => format!("bean '{}' 重複註冊", name),
            AopError::UnknownComponent { name, .. } => format!("未知的元件 '{}'", name),
            AopError::ConfigValidationError { field, message } => {
                format!("配置錯誤 ({}): {}", field, message)
            }
            AopError::InvalidConfigValueError { field, value, .. } => {
                format!("配置值無效: {} = '{}'", field, value)
            }
            AopError::IoError(e) => format!("檔案讀寫失敗: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AopError::NoSuchBean { .. } | AopError::UnknownComponent { .. } => {
                "Check the [context].scan list in the configuration".to_string()
            }
            AopError::BeanNotOfRequiredType { .. } => {
                "Enable aspect.proxy_target_class or look the bean up by name".to_string()
            }
            AopError::NoUniqueBean { .. } => "Look the bean up by name instead of by type".to_string(),
            AopError::DuplicateBean { .. } => "Remove the duplicate registration".to_string(),
            AopError::ConfigValidationError { .. } | AopError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            AopError::IoError(_) => "Make sure the file exists and is readable".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_high_severity() {
        let err = AopError::NoSuchBean {
            name: "cat".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("cat"));
    }

    #[test]
    fn test_config_errors_map_to_exit_code_two() {
        let err = AopError::ConfigValidationError {
            field: "context.scan".to_string(),
            message: "empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_error_converts() {
        let err: AopError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.recovery_suggestion().is_empty());
    }
}
