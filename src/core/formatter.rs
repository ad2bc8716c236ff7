use crate::core::words::number_to_words;
use crate::domain::model::{AmountParts, Conversion};
use crate::domain::registry;
use crate::utils::error::ConversionError;

pub const MIN_AMOUNT: f64 = 0.0;
pub const MAX_AMOUNT: f64 = 999_999_999.999;

const SUBUNITS_PER_UNIT: f64 = 100.0;

/// Spells out `amount` in `currency`, e.g. `123.12` in `USD` becomes
/// "One hundred twenty three dollars and twelve cents".
///
/// The range is checked before the currency code. Codes are matched
/// exactly, so `"usd"` is not `"USD"`.
pub fn format_currency(amount: f64, currency: &str) -> Result<String, ConversionError> {
    if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
        return Err(ConversionError::OutOfRange {
            value: amount,
            min: MIN_AMOUNT,
            max: MAX_AMOUNT,
        });
    }

    let definition =
        registry::lookup(currency).ok_or_else(|| ConversionError::UnsupportedCurrency {
            code: currency.to_string(),
        })?;

    let parts = split_amount(amount);
    tracing::debug!(
        amount,
        currency,
        integer = parts.integer,
        fractional = parts.fractional,
        "Split amount"
    );

    let unit_words = number_to_words(parts.integer)?;
    let subunit_words = number_to_words(u64::from(parts.fractional))?;

    let phrase = format!(
        "{} {} and {} {}",
        unit_words,
        definition.unit_name(parts.integer),
        subunit_words,
        definition.subunit_name(parts.fractional)
    );

    Ok(capitalize_first(&phrase))
}

/// Like [`format_currency`] but folds the outcome into a [`Conversion`]
/// record instead of failing.
pub fn convert(amount: f64, currency: &str) -> Conversion {
    let (words, error) = match format_currency(amount, currency) {
        Ok(words) => (Some(words), None),
        Err(e) => (None, Some(e.to_string())),
    };

    Conversion {
        amount,
        currency: currency.to_string(),
        words,
        error,
    }
}

/// Splits an in-range amount into whole units and hundredths.
///
/// Hundredths are rounded half away from zero. When they round up to a
/// full unit the whole part is carried and the hundredths reset to zero.
pub fn split_amount(amount: f64) -> AmountParts {
    let integer = amount.trunc() as u64;
    let fractional = (amount.fract() * SUBUNITS_PER_UNIT).round();

    if fractional >= SUBUNITS_PER_UNIT {
        tracing::trace!(amount, "Hundredths rounded to a full unit, carrying");
        return AmountParts {
            integer: integer + 1,
            fractional: 0,
        };
    }

    AmountParts {
        integer,
        fractional: fractional as u8,
    }
}

// positional only: the first char is uppercased, nothing else is touched
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_amount() {
        assert_eq!(
            split_amount(403210033.04),
            AmountParts {
                integer: 403210033,
                fractional: 4
            }
        );
        assert_eq!(
            split_amount(1.01),
            AmountParts {
                integer: 1,
                fractional: 1
            }
        );
        assert_eq!(
            split_amount(0.0),
            AmountParts {
                integer: 0,
                fractional: 0
            }
        );
    }

    #[test]
    fn test_split_amount_carries_full_unit() {
        assert_eq!(
            split_amount(2.999),
            AmountParts {
                integer: 3,
                fractional: 0
            }
        );
        assert_eq!(
            split_amount(MAX_AMOUNT),
            AmountParts {
                integer: 1_000_000_000,
                fractional: 0
            }
        );
    }

    #[test]
    fn test_split_amount_ties_round_away_from_zero() {
        // both are exact in binary, so these are true ties
        assert_eq!(split_amount(0.125).fractional, 13);
        assert_eq!(split_amount(0.375).fractional, 38);
    }

    #[test]
    fn test_capitalize_first_is_positional() {
        assert_eq!(capitalize_first("one dollar"), "One dollar");
        assert_eq!(capitalize_first("öre"), "Öre");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("a Bc"), "A Bc");
    }

    #[test]
    fn test_range_checked_before_currency() {
        assert!(matches!(
            format_currency(-1.0, "LIRA"),
            Err(ConversionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_nan_is_out_of_range() {
        assert!(matches!(
            format_currency(f64::NAN, "USD"),
            Err(ConversionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_convert_records_error() {
        let conversion = convert(100.0, "LIRA");
        assert!(!conversion.is_success());
        assert_eq!(
            conversion.error.as_deref(),
            Some("LIRA is not a supported currency")
        );

        let conversion = convert(84.14, "USD");
        assert_eq!(
            conversion.words.as_deref(),
            Some("Eighty four dollars and fourteen cents")
        );
    }
}
