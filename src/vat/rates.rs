//! VAT-rate table parsing and lookup.
//!
//! The table arrives as a JSON string from shop configuration, shaped
//! `{"standard-rate": {"DE": 19, "FR": 20}}`. Anything that cannot be read
//! resolves to "no rate" rather than an error.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rate category consulted for net pricing.
pub const STANDARD_RATE: &str = "standard-rate";

/// Rate category → (ISO country code → percentage rate).
///
/// Category entries are kept as raw JSON and type-checked on lookup, so a
/// malformed category does not hide the well-formed ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VatRateTable {
    categories: BTreeMap<String, Value>,
}

impl VatRateTable {
    /// Percentage rate for `country` in `category`, if it is a JSON number.
    pub fn rate(&self, category: &str, country: &str) -> Option<Decimal> {
        let rates = self.categories.get(category)?.as_object()?;
        match rates.get(country)? {
            Value::Number(n) => number_to_decimal(n),
            _ => None,
        }
    }

    /// Whether `category` is present in the table.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }
}

fn number_to_decimal(n: &serde_json::Number) -> Option<Decimal> {
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Parse the shop's VAT-rate configuration.
///
/// Returns `None` for an absent or empty value and for anything that is not
/// a JSON object.
pub fn parse_vat_rates(raw: Option<&str>) -> Option<VatRateTable> {
    let raw = raw.filter(|r| !r.is_empty())?;
    match serde_json::from_str::<VatRateTable>(raw) {
        Ok(table) => Some(table),
        Err(err) => {
            tracing::debug!(error = %err, "VAT-rate configuration is not a rate table");
            None
        }
    }
}

/// Standard rate for `country_code`, or `None` when no table is available or
/// the table has no numeric entry for that country.
pub fn get_vat_rate(table: Option<&VatRateTable>, country_code: &str) -> Option<Decimal> {
    table?.rate(STANDARD_RATE, country_code)
}
