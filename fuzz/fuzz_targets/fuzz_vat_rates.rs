#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let table = b2b_eu_tax_pricing::vat::parse_vat_rates(Some(s));
        if let Some(rate) = b2b_eu_tax_pricing::vat::get_vat_rate(table.as_ref(), "DE") {
            if rate > Decimal::ZERO {
                let _ = b2b_eu_tax_pricing::vat::calculate_net_amount("119.00", rate);
            }
        }
    }
});
