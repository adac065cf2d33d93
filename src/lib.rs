//! # b2b-eu-tax-pricing
//!
//! Net (VAT-excluded) cart line pricing for tax-exempt B2B buyers located
//! outside the seller's home country.
//!
//! Given a cart snapshot, the buyer, and the shop's VAT-rate table, the
//! transform emits the minimal set of `updateLinePrice` operations that
//! replace each gross unit price with its net equivalent. It is pure and
//! stateless: missing or malformed data yields fewer operations, never an
//! error.
//!
//! All money arithmetic uses [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use b2b_eu_tax_pricing::core::*;
//! use b2b_eu_tax_pricing::pricing::run;
//!
//! let input = InputBuilder::new()
//!     .buyer(BuyerBuilder::b2b("DE")
//!         .tax_exempt("true")
//!         .vat_number("DE123456789")
//!         .build())
//!     .add_line(LineBuilder::new("gid://shopify/CartLine/1").cost("119.00", "EUR").build())
//!     .vat_rates(r#"{"standard-rate":{"DE":19}}"#)
//!     .build();
//!
//! let result = run(&input);
//! assert_eq!(result.operations[0].fixed_price().amount, "100.00");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Input/output payload types, builders, boundary errors |
//! | `vat` | Buyer eligibility, VAT-rate table, net calculation |
//! | `pricing` (default) | Operation builder and pipeline entry point |
//! | `runner` | stdin → stdout host binary with `tracing-subscriber` logging |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "vat")]
pub mod vat;

#[cfg(feature = "pricing")]
pub mod pricing;

#[cfg(feature = "pricing")]
pub use crate::pricing::{run, run_json};
