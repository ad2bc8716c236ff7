use crate::core::formatter::{MAX_AMOUNT, MIN_AMOUNT};
use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| AppError::ConfigError {
            message: format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(amount) = self.defaults.amount {
            validate_range("defaults.amount", amount, MIN_AMOUNT, MAX_AMOUNT)?;
        }

        if let Some(currency) = &self.defaults.currency {
            validate_non_empty_string("defaults.currency", currency)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn amount(&self) -> Option<f64> {
        self.defaults.amount
    }

    fn currency(&self) -> Option<&str> {
        self.defaults.currency.as_deref()
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.output.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[defaults]
amount = 84.14
currency = "BRL"

[output]
format = "csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.amount(), Some(84.14));
        assert_eq!(config.currency(), Some("BRL"));
        assert_eq!(config.output_format(), Some(OutputFormat::Csv));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_every_table_is_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.amount(), None);
        assert_eq!(config.output_format(), None);

        let config = TomlConfig::from_toml_str("[defaults]\ncurrency = \"SEK\"\n").unwrap();
        assert_eq!(config.currency(), Some("SEK"));
        assert_eq!(config.amount(), None);
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let result = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(AppError::TomlError(_))));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[defaults]\namount = 1000000000.0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[defaults]\ncurrency = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[defaults]\namount = 1.01\ncurrency = \"SEK\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.amount(), Some(1.01));
        assert_eq!(config.currency(), Some("SEK"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = TomlConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(AppError::ConfigError { .. })));
    }
}
