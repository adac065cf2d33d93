//! Pipeline entry point.

use rust_decimal::Decimal;

use super::config::PricingConfig;
use super::operations::{NetAmountByLine, build_operations};
use crate::core::{FunctionResult, Input, PricingError};
use crate::vat::{calculate_net_amount, is_tax_exempt_buyer_outside, parse_vat_rates};

/// Compute net line prices for a tax-exempt foreign B2B buyer using the
/// default [`PricingConfig`].
pub fn run(input: &Input) -> FunctionResult {
    run_with_config(input, &PricingConfig::default())
}

/// Compute net line prices for a tax-exempt foreign B2B buyer.
///
/// # Logic
///
/// 1. Buyer, company location, and eligibility are checked → otherwise empty
/// 2. Company location must carry a country code → otherwise empty
/// 3. Rate for that country must exist and be positive → otherwise empty
/// 4. Every line with a gross amount gets a net amount
/// 5. Lines whose price changes produce an `updateLinePrice` operation
///
/// Missing or malformed data never fails the run; it yields fewer (or no)
/// operations.
pub fn run_with_config(input: &Input, config: &PricingConfig) -> FunctionResult {
    let buyer = input.buyer_identity();
    let company_location = buyer.and_then(|b| b.company_location.as_ref());
    let vat_rates = parse_vat_rates(input.vat_rate_config());

    let Some(company_location) = company_location else {
        tracing::debug!("no buyer company location, keeping gross prices");
        return FunctionResult::empty();
    };

    if !is_tax_exempt_buyer_outside(buyer, &config.home_country) {
        tracing::debug!("buyer is not a tax-exempt foreign B2B customer, keeping gross prices");
        return FunctionResult::empty();
    }

    let Some(country_code) = company_location.country() else {
        tracing::debug!("company location has no country code, keeping gross prices");
        return FunctionResult::empty();
    };

    let vat_rate = vat_rates
        .as_ref()
        .and_then(|table| table.rate(&config.rate_category, country_code));

    let vat_rate = match vat_rate {
        Some(rate) if rate > Decimal::ZERO => rate,
        Some(rate) => {
            tracing::debug!(country = country_code, %rate, "non-positive VAT rate, keeping gross prices");
            return FunctionResult::empty();
        }
        None => {
            match vat_rates.as_ref() {
                None => tracing::debug!("no readable VAT-rate table, keeping gross prices"),
                Some(table) if !table.has_category(&config.rate_category) => tracing::debug!(
                    category = %config.rate_category,
                    "rate category missing from VAT-rate table, keeping gross prices"
                ),
                Some(_) => tracing::debug!(
                    country = country_code,
                    category = %config.rate_category,
                    "no numeric VAT rate for country, keeping gross prices"
                ),
            }
            return FunctionResult::empty();
        }
    };

    let lines = input.lines();
    let mut net_amount_by_line = NetAmountByLine::with_capacity(lines.len());
    for line in lines {
        let Some(gross) = line.amount() else {
            continue;
        };
        net_amount_by_line.insert(line.id.clone(), calculate_net_amount(gross, vat_rate));
    }

    let operations = build_operations(lines, &net_amount_by_line);
    tracing::debug!(
        country = country_code,
        %vat_rate,
        lines = lines.len(),
        operations = operations.len(),
        "net pricing applied"
    );

    FunctionResult::from(operations)
}

/// Run the pipeline on a JSON input payload and return the JSON result.
///
/// Only a payload that cannot be read as [`Input`] is an error. Leaf values
/// are typed strictly: a mistyped field (a numeric `amount`, a string
/// `isB2BCustomer`) fails the whole payload rather than reading as absent.
///
/// ```
/// let output = b2b_eu_tax_pricing::pricing::run_json("{}").unwrap();
/// assert_eq!(output, r#"{"operations":[]}"#);
/// ```
pub fn run_json(payload: &str) -> Result<String, PricingError> {
    let input: Input = serde_json::from_str(payload).map_err(PricingError::Payload)?;
    let result = run(&input);
    serde_json::to_string(&result).map_err(PricingError::Output)
}
