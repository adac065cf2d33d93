#![cfg(feature = "vat")]

use b2b_eu_tax_pricing::core::*;
use b2b_eu_tax_pricing::vat::*;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

#[test]
fn eligible_with_numeric_flag() {
    let buyer = BuyerBuilder::b2b("FR")
        .tax_exempt("1")
        .vat_number("FR12345678901")
        .build();
    assert!(is_tax_exempt_buyer(Some(&buyer)));
}

#[test]
fn eligible_with_padded_values() {
    let buyer = BuyerBuilder::b2b("IT")
        .tax_exempt("  tRuE  ")
        .vat_number("  IT12345678901  ")
        .build();
    assert!(is_tax_exempt_buyer(Some(&buyer)));
}

#[test]
fn home_country_is_austria() {
    assert_eq!(HOME_COUNTRY, "AT");
    let buyer = BuyerBuilder::b2b("AT")
        .tax_exempt("true")
        .vat_number("ATU12345678")
        .build();
    assert!(!is_tax_exempt_buyer(Some(&buyer)));
    assert!(is_tax_exempt_buyer_outside(Some(&buyer), "DE"));
}

#[test]
fn eligibility_from_host_json() {
    let buyer: BuyerIdentity = serde_json::from_str(
        r#"{
            "customer": { "isB2BCustomer": true },
            "companyLocation": {
                "countryCode": "NL",
                "taxExempt": { "value": "true" },
                "vatNumber": { "value": "NL123456789B01" }
            }
        }"#,
    )
    .unwrap();
    assert!(is_tax_exempt_buyer(Some(&buyer)));

    let buyer: BuyerIdentity = serde_json::from_str(
        r#"{
            "customer": { "isB2BCustomer": true },
            "companyLocation": {
                "countryCode": "NL",
                "taxExempt": { "value": null },
                "vatNumber": { "value": "NL123456789B01" }
            }
        }"#,
    )
    .unwrap();
    assert!(!is_tax_exempt_buyer(Some(&buyer)));
}

// ---------------------------------------------------------------------------
// Rate table
// ---------------------------------------------------------------------------

#[test]
fn full_eu_table() {
    let raw = r#"{
        "standard-rate": {
            "AT": 20, "BE": 21, "DE": 19, "DK": 25, "FI": 25.5, "FR": 20,
            "HU": 27, "IE": 23, "LU": 17, "NL": 21, "SE": 25
        },
        "reduced-rate": { "DE": 7 }
    }"#;
    let table = parse_vat_rates(Some(raw)).unwrap();
    assert_eq!(get_vat_rate(Some(&table), "HU"), Some(dec!(27)));
    assert_eq!(get_vat_rate(Some(&table), "FI"), Some(dec!(25.5)));
    assert_eq!(get_vat_rate(Some(&table), "LU"), Some(dec!(17)));
    assert_eq!(get_vat_rate(Some(&table), "PL"), None);
    assert_eq!(table.rate("reduced-rate", "DE"), Some(dec!(7)));
    assert!(table.has_category(STANDARD_RATE));
}

#[test]
fn unreadable_tables() {
    for raw in ["", " ", "{", "\"standard-rate\"", "true", "[1,2]"] {
        assert!(parse_vat_rates(Some(raw)).is_none(), "{raw:?}");
    }
}

#[test]
fn empty_object_has_no_rates() {
    let table = parse_vat_rates(Some("{}")).unwrap();
    assert_eq!(get_vat_rate(Some(&table), "DE"), None);
}

// ---------------------------------------------------------------------------
// Net calculation
// ---------------------------------------------------------------------------

#[test]
fn net_reference_values() {
    assert_eq!(calculate_net_amount("121.00", dec!(21)), "100.00");
    assert_eq!(calculate_net_amount("abc", dec!(21)), "abc");
}

#[test]
fn net_at_common_rates() {
    assert_eq!(calculate_net_amount("49.99", dec!(19)), "42.01");
    assert_eq!(calculate_net_amount("49.99", dec!(20)), "41.66");
    assert_eq!(calculate_net_amount("1250.00", dec!(25)), "1000.00");
    assert_eq!(calculate_net_amount("1270.00", dec!(27)), "1000.00");
    assert_eq!(calculate_net_amount("9.99", dec!(25.5)), "7.96");
}

#[test]
fn net_always_has_two_decimals() {
    for gross in ["1", "1.5", "19.999", "1000000"] {
        let net = calculate_net_amount(gross, dec!(19));
        let (_, decimals) = net.split_once('.').unwrap();
        assert_eq!(decimals.len(), NET_AMOUNT_SCALE as usize, "{gross} → {net}");
    }
}

#[test]
fn net_of_large_amount() {
    assert_eq!(
        calculate_net_amount("1190000000.00", dec!(19)),
        "1000000000.00"
    );
}
