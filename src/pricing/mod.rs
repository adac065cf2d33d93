//! Net-price operation building and the pipeline entry point.
//!
//! # Example
//!
//! ```
//! use b2b_eu_tax_pricing::core::*;
//! use b2b_eu_tax_pricing::pricing::run;
//!
//! let input = InputBuilder::new()
//!     .buyer(BuyerBuilder::b2b("DE").tax_exempt("true").vat_number("DE123456789").build())
//!     .add_line(LineBuilder::new("1").cost("119.00", "EUR").build())
//!     .vat_rates(r#"{"standard-rate":{"DE":19}}"#)
//!     .build();
//!
//! let result = run(&input);
//! assert_eq!(result.operations, vec![CartOperation::update_line_price("1", "100.00", "EUR")]);
//! ```

mod config;
mod entry;
mod operations;

pub use config::PricingConfig;
pub use entry::{run, run_json, run_with_config};
pub use operations::{NetAmountByLine, build_operations};
