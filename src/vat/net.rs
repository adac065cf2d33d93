//! Gross → net conversion for a single unit amount.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of every computed net amount.
pub const NET_AMOUNT_SCALE: u32 = 2;

/// Convert a gross (VAT-inclusive) amount to net at `vat_rate_percent`.
///
/// `net = gross / (1 + rate / 100)`, computed in exact decimal arithmetic and
/// rounded to two places with the midpoint rounded away from zero
/// (`1.005 → "1.01"`, `-1.005 → "-1.01"`). The result always carries exactly
/// two decimals.
///
/// An empty or whitespace-only `gross` counts as zero. If `gross` is
/// otherwise not a decimal number, or the division is undefined
/// (`rate == -100`) or overflows, `gross` is returned unchanged.
///
/// ```
/// use b2b_eu_tax_pricing::vat::calculate_net_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_net_amount("121.00", dec!(21)), "100.00");
/// assert_eq!(calculate_net_amount("abc", dec!(21)), "abc");
/// ```
pub fn calculate_net_amount(gross: &str, vat_rate_percent: Decimal) -> String {
    let Some(gross_amount) = parse_amount(gross) else {
        return gross.to_string();
    };

    let net = (vat_rate_percent / Decimal::ONE_HUNDRED)
        .checked_add(Decimal::ONE)
        .and_then(|divisor| gross_amount.checked_div(divisor));

    match net {
        Some(net) => format_amount(net),
        None => gross.to_string(),
    }
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn format_amount(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(NET_AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(NET_AMOUNT_SCALE);
    rounded.to_string()
}
