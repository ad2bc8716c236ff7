use crate::domain::model::CurrencyDefinition;
use std::collections::HashMap;
use std::sync::OnceLock;

static CURRENCIES: [CurrencyDefinition; 4] = [
    CurrencyDefinition {
        code: "USD",
        unit: "dollar",
        unit_plural: "dollars",
        subunit: "cent",
        subunit_plural: "cents",
    },
    CurrencyDefinition {
        code: "EURO",
        unit: "euro",
        unit_plural: "euros",
        subunit: "cent",
        subunit_plural: "cents",
    },
    CurrencyDefinition {
        code: "SEK",
        unit: "krona",
        unit_plural: "kronor",
        subunit: "öre",
        subunit_plural: "öre",
    },
    CurrencyDefinition {
        code: "BRL",
        unit: "real",
        unit_plural: "reais",
        subunit: "centavo",
        subunit_plural: "centavos",
    },
];

static REGISTRY: OnceLock<HashMap<&'static str, &'static CurrencyDefinition>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, &'static CurrencyDefinition> {
    REGISTRY.get_or_init(|| CURRENCIES.iter().map(|c| (c.code, c)).collect())
}

/// Exact, case-sensitive lookup of a currency code.
pub fn lookup(code: &str) -> Option<&'static CurrencyDefinition> {
    registry().get(code).copied()
}

/// Registered codes in alphabetical order.
pub fn supported_codes() -> Vec<&'static str> {
    let mut codes: Vec<_> = registry().keys().copied().collect();
    codes.sort_unstable();
    codes
}

pub fn all() -> impl Iterator<Item = &'static CurrencyDefinition> {
    CURRENCIES.iter()
}
