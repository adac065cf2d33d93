#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Invalid payloads may error; nothing may panic.
        let _ = b2b_eu_tax_pricing::run_json(s);
    }
});
