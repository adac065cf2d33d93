use serde::{Deserialize, Serialize};

use crate::vat::{HOME_COUNTRY, STANDARD_RATE};

/// Static pricing parameters.
///
/// The runtime rate table comes from the shop metafield; this only selects
/// which country counts as home and which rate category applies.
///
/// ```
/// use b2b_eu_tax_pricing::pricing::PricingConfig;
///
/// let config = PricingConfig::default().home_country("DE");
/// assert_eq!(config.home_country, "DE");
/// assert_eq!(config.rate_category, "standard-rate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    /// Buyers located here never receive net pricing.
    pub home_country: String,
    /// Category key looked up in the rate table.
    pub rate_category: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            home_country: HOME_COUNTRY.to_string(),
            rate_category: STANDARD_RATE.to_string(),
        }
    }
}

impl PricingConfig {
    pub fn home_country(mut self, country_code: impl Into<String>) -> Self {
        self.home_country = country_code.into();
        self
    }

    pub fn rate_category(mut self, category: impl Into<String>) -> Self {
        self.rate_category = category.into();
        self
    }
}
