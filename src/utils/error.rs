use thiserror::Error;

/// Failures of the amount-to-words conversion itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("{value:.3} is < {min:.3} or > {max:.3}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("{code} is not a supported currency")]
    UnsupportedCurrency { code: String },

    /// A digit group outside 1..=3 digits reached the group renderer.
    #[error("length of digit group must be between 1 - 3, got {len}")]
    MalformedGroup { len: usize },

    #[error("digit group contains {digit}, which is not a decimal digit")]
    InvalidDigit { digit: u8 },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Conversion(
                ConversionError::MalformedGroup { .. } | ConversionError::InvalidDigit { .. },
            ) => ErrorCategory::Internal,
            AppError::Conversion(_) => ErrorCategory::Input,
            AppError::IoError(_) | AppError::CsvError(_) | AppError::SerializationError(_) => {
                ErrorCategory::Io
            }
            AppError::TomlError(_)
            | AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息，轉換錯誤直接輸出原始訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Conversion(e) => e.to_string(),
            AppError::IoError(e) => format!("Could not read or write data: {}", e),
            AppError::CsvError(e) => format!("Input is not valid CSV: {}", e),
            AppError::SerializationError(e) => format!("Could not encode output: {}", e),
            AppError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            AppError::ConfigError { message } => message.clone(),
            AppError::InvalidConfigValueError { field, value, reason } => {
                format!("{} = '{}' is invalid: {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::Conversion(ConversionError::OutOfRange { min, max, .. }) => {
                format!("Use an amount between {:.3} and {:.3}", min, max)
            }
            AppError::Conversion(ConversionError::UnsupportedCurrency { .. }) => format!(
                "Use one of the supported currencies: {}",
                crate::domain::registry::supported_codes().join(", ")
            ),
            AppError::Conversion(
                ConversionError::MalformedGroup { .. } | ConversionError::InvalidDigit { .. },
            ) => "This is a bug in the digit grouping, please report it".to_string(),
            AppError::IoError(_) => "Check that the input file exists and is readable".to_string(),
            AppError::CsvError(_) => {
                "Provide a CSV file with an 'amount' column and an optional 'currency' column"
                    .to_string()
            }
            AppError::SerializationError(_) => "Try a different --format".to_string(),
            AppError::TomlError(_) | AppError::ConfigError { .. } => {
                "Check the config file against the documented [defaults] and [output] tables"
                    .to_string()
            }
            AppError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_has_value_and_bounds() {
        let err = ConversionError::OutOfRange {
            value: -1.0,
            min: 0.0,
            max: 999_999_999.999,
        };
        assert_eq!(err.to_string(), "-1.000 is < 0.000 or > 999999999.999");
    }

    #[test]
    fn test_unsupported_currency_message_names_code() {
        let err = ConversionError::UnsupportedCurrency {
            code: "LIRA".to_string(),
        };
        assert_eq!(err.to_string(), "LIRA is not a supported currency");
    }

    #[test]
    fn test_severity_follows_category() {
        let input: AppError = ConversionError::UnsupportedCurrency {
            code: "usd".to_string(),
        }
        .into();
        assert_eq!(input.category(), ErrorCategory::Input);
        assert_eq!(input.severity(), ErrorSeverity::Medium);
        assert!(input.recovery_suggestion().contains("USD"));

        let internal: AppError = ConversionError::MalformedGroup { len: 4 }.into();
        assert_eq!(internal.severity(), ErrorSeverity::Critical);

        let config = AppError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.user_friendly_message(), "bad");
    }
}
