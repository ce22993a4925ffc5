use baggo_rules::{
    country_rules, hs_code, hs_codes, transport_rules, CountryCode, DutyRate, RestrictionNote,
    TransportMode,
};
use serde_json::json;

#[test]
fn duty_rate_serializes_number_or_marker() {
    assert_eq!(serde_json::to_string(&DutyRate::Fixed(0.2)).unwrap(), "0.2");
    assert_eq!(
        serde_json::to_string(&DutyRate::Varies).unwrap(),
        r#""varies""#
    );
}

#[test]
fn restriction_note_omits_absent_limits() {
    let note = RestrictionNote::new("medicine", "Max 3 month supply with prescription");
    assert_eq!(
        serde_json::to_value(&note).unwrap(),
        json!({"item": "medicine", "note": "Max 3 month supply with prescription"})
    );
}

#[test]
fn air_restrictions_flatten_limits() {
    let air = transport_rules(&TransportMode::Air);
    let lithium = serde_json::to_value(&air.restricted[0]).unwrap();
    assert_eq!(
        lithium,
        json!({
            "item": "lithium_batteries",
            "note": "Must be in device or carry-on",
            "maxQty": 2,
            "maxWh": 100.0
        })
    );
}

#[test]
fn country_restriction_carries_cash_limit() {
    let eu = country_rules(&CountryCode::new("EU"));
    let currency = eu
        .restricted
        .iter()
        .find(|r| r.item == "currency")
        .unwrap();
    assert_eq!(
        serde_json::to_value(currency).unwrap(),
        json!({
            "item": "currency",
            "note": "Must declare if exceeding",
            "limit": 10000.0,
            "currency": "EUR"
        })
    );
}

#[test]
fn country_rules_match_expected_shape() {
    let ng = serde_json::to_value(country_rules(&CountryCode::new("NG"))).unwrap();
    assert_eq!(ng["dutyFreeThreshold"], json!(50000.0));
    assert_eq!(ng["vatRate"], json!(0.075));
    assert_eq!(ng["currency"], json!("NGN"));
    assert_eq!(
        ng["documentation"],
        json!(["form_m", "son_certificate", "packing_list"])
    );
    assert_eq!(ng["processingDays"], json!({"air": 3, "ship": 7, "bus": 2}));
    assert_eq!(ng["restricted"][0]["duty"], json!(0.2));
}

#[test]
fn unknown_modes_use_air_rules() {
    let rules = transport_rules(&TransportMode::Other("hovercraft".into()));
    assert_eq!(rules.mode, "air");
    assert_eq!(rules.max_weight_kg, 23.0);
}

#[test]
fn hs_lookup_falls_back_to_household_items() {
    assert_eq!(hs_code("electronics_phones").code, "8517");
    let fallback = hs_code("electronics");
    assert_eq!(fallback.tag, "household_items");
    assert_eq!(fallback.code, "9403-9406");
    assert_eq!(hs_codes().last().unwrap().tag, "household_items");
    assert_eq!(hs_codes().count(), 27);
}
