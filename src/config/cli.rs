use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "currency-words")]
#[command(about = "Spell out currency amounts as English words")]
pub struct CliConfig {
    /// amount to translate [default: 500]
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// currency type [default: USD]
    #[arg(long)]
    pub currency: Option<String>,

    /// output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// CSV file with `amount` and optional `currency` columns, `-` for stdin
    #[arg(long)]
    pub input: Option<String>,

    /// TOML file with [defaults] and [output] tables
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "List supported currencies and exit")]
    pub list_currencies: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn amount(&self) -> Option<f64> {
        self.amount
    }

    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("--input", input)?;
        }
        if let Some(config) = &self.config {
            validate_path("--config", config)?;
        }
        Ok(())
    }
}
