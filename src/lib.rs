pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::Settings;

pub use crate::core::batch::{BatchConverter, BatchSummary};
pub use crate::core::formatter::{convert, format_currency, split_amount, MAX_AMOUNT, MIN_AMOUNT};
pub use crate::core::grouper::group_digits;
pub use crate::core::words::{group_to_words, number_to_words};
pub use crate::domain::model::{
    AmountParts, AmountRecord, Conversion, CurrencyDefinition, OutputFormat,
};
pub use crate::domain::registry;
pub use crate::utils::error::{AppError, ConversionError, Result};
