use crate::core::formatter::convert;
use crate::domain::model::{AmountRecord, Conversion, OutputFormat};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::{Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
}

/// Converts CSV rows of `amount[,currency]` into phrases.
///
/// A row that fails to convert keeps its error message in the output; only
/// unreadable input or a failing writer aborts the batch.
pub struct BatchConverter {
    default_currency: String,
    format: OutputFormat,
}

// csv needs every column present on every row
#[derive(Serialize)]
struct CsvRow<'a> {
    amount: f64,
    currency: &'a str,
    words: Option<&'a str>,
    error: Option<&'a str>,
}

impl<'a> From<&'a Conversion> for CsvRow<'a> {
    fn from(conversion: &'a Conversion) -> Self {
        Self {
            amount: conversion.amount,
            currency: &conversion.currency,
            words: conversion.words.as_deref(),
            error: conversion.error.as_deref(),
        }
    }
}

impl BatchConverter {
    pub fn new(default_currency: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            default_currency: default_currency.into(),
            format,
        }
    }

    pub fn extract<R: Read>(&self, reader: R) -> Result<Vec<AmountRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize()
            .collect::<std::result::Result<Vec<AmountRecord>, _>>()?;

        tracing::debug!("Extracted {} records", records.len());
        Ok(records)
    }

    pub fn transform(&self, records: Vec<AmountRecord>) -> Vec<Conversion> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let currency = record
                    .currency
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| self.default_currency.clone());

                let conversion = convert(record.amount, &currency);
                if let Some(error) = &conversion.error {
                    tracing::warn!("Row {} not converted: {}", index + 1, error);
                }
                conversion
            })
            .collect()
    }

    pub fn load<W: Write>(&self, conversions: &[Conversion], mut writer: W) -> Result<BatchSummary> {
        match self.format {
            OutputFormat::Text => {
                for conversion in conversions {
                    match (&conversion.words, &conversion.error) {
                        (Some(words), _) => writeln!(writer, "{}", words)?,
                        (None, Some(error)) => writeln!(writer, "error: {}", error)?,
                        (None, None) => writeln!(writer)?,
                    }
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, conversions)?;
                writeln!(writer)?;
            }
            OutputFormat::Csv => {
                let mut csv_writer = csv::Writer::from_writer(&mut writer);
                for conversion in conversions {
                    csv_writer.serialize(CsvRow::from(conversion))?;
                }
                csv_writer.flush()?;
            }
        }
        writer.flush()?;

        let converted = conversions.iter().filter(|c| c.is_success()).count();
        Ok(BatchSummary {
            total: conversions.len(),
            converted,
            failed: conversions.len() - converted,
        })
    }

    pub fn run<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<BatchSummary> {
        let records = self.extract(reader)?;
        let conversions = self.transform(records);
        let summary = self.load(&conversions, writer)?;

        tracing::info!(
            "Converted {}/{} amounts ({} failed)",
            summary.converted,
            summary.total,
            summary.failed
        );
        Ok(summary)
    }
}
