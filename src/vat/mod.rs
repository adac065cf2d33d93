//! Buyer tax-exemption, VAT-rate lookup, and net-amount calculation.
//!
//! # Example
//!
//! ```
//! use b2b_eu_tax_pricing::core::BuyerBuilder;
//! use b2b_eu_tax_pricing::vat::*;
//! use rust_decimal_macros::dec;
//!
//! let buyer = BuyerBuilder::b2b("DE").tax_exempt("true").vat_number("DE123456789").build();
//! assert!(is_tax_exempt_buyer(Some(&buyer)));
//!
//! let table = parse_vat_rates(Some(r#"{"standard-rate":{"DE":19}}"#));
//! assert_eq!(get_vat_rate(table.as_ref(), "DE"), Some(dec!(19)));
//!
//! assert_eq!(calculate_net_amount("119.00", dec!(19)), "100.00");
//! ```

mod eligibility;
mod net;
mod rates;

pub use eligibility::{
    HOME_COUNTRY, is_tax_exempt_buyer, is_tax_exempt_buyer_outside, normalize_boolean,
};
pub use net::{NET_AMOUNT_SCALE, calculate_net_amount};
pub use rates::{STANDARD_RATE, VatRateTable, get_vat_rate, parse_vat_rates};
