//! Tax-exempt B2B buyer detection.

use crate::core::BuyerIdentity;

/// Seller's home country (ISO 3166-1 alpha-2). Buyers located here always
/// pay gross prices.
pub const HOME_COUNTRY: &str = "AT";

/// Interpret a string-typed boolean.
///
/// Trimmed and lower-cased, only `"true"` and `"1"` are truthy. Absent or
/// any other value is `false`.
pub fn normalize_boolean(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let normalized = v.trim().to_lowercase();
        normalized == "true" || normalized == "1"
    })
}

/// Whether the buyer qualifies for VAT-exempt net pricing against the
/// default [`HOME_COUNTRY`].
pub fn is_tax_exempt_buyer(buyer: Option<&BuyerIdentity>) -> bool {
    is_tax_exempt_buyer_outside(buyer, HOME_COUNTRY)
}

/// Whether the buyer qualifies for VAT-exempt net pricing.
///
/// # Logic
///
/// 1. Buyer present with a customer record flagged B2B
/// 2. Buyer has a company location
/// 3. Location's tax-exempt flag is truthy (see [`normalize_boolean`])
/// 4. Location's VAT number is non-empty after trimming
/// 5. Location's country code is present and differs from `home_country`
pub fn is_tax_exempt_buyer_outside(buyer: Option<&BuyerIdentity>, home_country: &str) -> bool {
    let Some(buyer) = buyer else {
        return false;
    };

    if !buyer.customer.as_ref().is_some_and(|c| c.is_b2b()) {
        return false;
    }

    let Some(location) = buyer.company_location.as_ref() else {
        return false;
    };

    if !normalize_boolean(location.tax_exempt_value()) {
        return false;
    }

    let vat_number = location.vat_number_value().unwrap_or_default().trim();
    if vat_number.is_empty() {
        return false;
    }

    match location.country() {
        Some(country) => country != home_country,
        None => false,
    }
}
