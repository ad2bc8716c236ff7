use serde::{Deserialize, Serialize};

/// Word forms for one registered currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyDefinition {
    pub code: &'static str,
    pub unit: &'static str,
    pub unit_plural: &'static str,
    pub subunit: &'static str,
    pub subunit_plural: &'static str,
}

impl CurrencyDefinition {
    /// Unit noun for a whole-unit count: singular only for exactly one.
    pub fn unit_name(&self, count: u64) -> &'static str {
        if count == 1 {
            self.unit
        } else {
            self.unit_plural
        }
    }

    /// Subunit noun for a hundredths count: singular only for exactly one.
    pub fn subunit_name(&self, count: u8) -> &'static str {
        if count == 1 {
            self.subunit
        } else {
            self.subunit_plural
        }
    }
}

/// An amount split into whole units and rounded hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountParts {
    pub integer: u64,
    /// Always within `0..=99`.
    pub fractional: u8,
}

/// One input row of a batch conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct AmountRecord {
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Outcome of converting one amount, either the phrase or the error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub amount: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Conversion {
    pub fn is_success(&self) -> bool {
        self.words.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sek() -> CurrencyDefinition {
        CurrencyDefinition {
            code: "SEK",
            unit: "krona",
            unit_plural: "kronor",
            subunit: "öre",
            subunit_plural: "öre",
        }
    }

    #[test]
    fn test_singular_only_for_exactly_one() {
        let sek = sek();
        assert_eq!(sek.unit_name(1), "krona");
        assert_eq!(sek.unit_name(0), "kronor");
        assert_eq!(sek.unit_name(2), "kronor");
        assert_eq!(sek.subunit_name(1), "öre");
        assert_eq!(sek.subunit_name(0), "öre");
    }

    #[test]
    fn test_conversion_json_skips_missing_fields() {
        let conversion = Conversion {
            amount: 1.5,
            currency: "USD".to_string(),
            words: Some("One dollar and fifty cents".to_string()),
            error: None,
        };
        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json["words"], "One dollar and fifty cents");
        assert!(json.get("error").is_none());
    }
}
