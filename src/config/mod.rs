#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};

pub const DEFAULT_AMOUNT: f64 = 500.0;
pub const DEFAULT_CURRENCY: &str = "USD";

/// Effective settings after layering.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub amount: f64,
    pub currency: String,
    pub format: OutputFormat,
}

impl Settings {
    /// Each setting comes from the first layer that has it, falling back to
    /// the built-in defaults.
    pub fn resolve(layers: &[&dyn ConfigProvider]) -> Self {
        let amount = layers
            .iter()
            .find_map(|layer| layer.amount())
            .unwrap_or(DEFAULT_AMOUNT);
        let currency = layers
            .iter()
            .find_map(|layer| layer.currency())
            .unwrap_or(DEFAULT_CURRENCY)
            .to_string();
        let format = layers
            .iter()
            .find_map(|layer| layer.output_format())
            .unwrap_or_default();

        Self {
            amount,
            currency,
            format,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&[])
    }
}

// the amount is left to the formatter so range errors keep their wording
impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("currency", &self.currency)
    }
}
