use baggo_core::{
    assess_shipment, calculate_risk_scores, check_compatibility, get_country_code,
    get_customs_compliance, input::RawShipmentRequest, traveler_score, AssessmentConfig,
    Assessor, CompatibilityStatus, Dimensions, Item, RawTripBatch, RiskClassification, RiskLevel,
    ShipmentRequest, Traveler, Trip,
};
use baggo_rules::{CountryCode, TransportMode};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

fn make_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 1, 9, 30, 0).unwrap()
}

fn make_trip(mode: TransportMode, from: &str, to: &str) -> Trip {
    Trip {
        id: Some("trip-1".to_string()),
        transport_mode: mode,
        origin_country: Some(from.to_string()),
        destination_country: Some(to.to_string()),
        available_kg: 20.0,
        departure: Some(make_now() + Duration::days(10)),
        ..Default::default()
    }
}

fn make_item(category: &str, kind: &str, weight: f64, value: f64) -> Item {
    Item {
        id: Some("item-1".to_string()),
        category: Some(category.to_string()),
        kind: Some(kind.to_string()),
        weight,
        value,
        ..Default::default()
    }
}

fn make_traveler() -> Traveler {
    Traveler {
        id: Some("traveler-1".to_string()),
        name: Some("Ada Obi".to_string()),
        completed_trips: 4.0,
        cancellations: 0.0,
        rating: Some(4.0),
    }
}

fn make_request(trip: Trip, item: Item) -> ShipmentRequest {
    ShipmentRequest {
        trip,
        item,
        traveler: make_traveler(),
        sender_country: None,
    }
}

fn assess_fixed(request: &ShipmentRequest) -> baggo_core::AssessmentResult {
    let mut rng = StdRng::seed_from_u64(42);
    Assessor::default().assess_at(request, make_now(), &mut rng)
}

#[test]
fn documents_to_france_are_duty_free() {
    let request = make_request(
        make_trip(TransportMode::Air, "GB", "France"),
        make_item("documents", "contract", 0.5, 10.0),
    );
    let result = assess_fixed(&request);

    assert_eq!(result.compatibility.status, CompatibilityStatus::Yes);
    let customs = result.customs.as_ref().unwrap();
    assert!(!customs.exceeds_duty_free);
    assert_eq!(customs.estimated_duty, 0.0);
    assert_eq!(customs.estimated_vat, 0.0);
    assert_eq!(customs.sender_country.as_str(), "GB");
}

#[test]
fn firearms_are_blocked_without_further_stages() {
    let request = make_request(
        make_trip(TransportMode::Car, "GB", "France"),
        make_item("general", "antique firearms", 2.0, 300.0),
    );
    let result = assess_fixed(&request);

    assert!(result.is_blocked());
    assert_eq!(result.confidence_score, 0);
    assert_eq!(result.risk_classification.overall(), RiskLevel::Blocked);
    assert!(result.compatibility.reasons[0].contains("universally prohibited"));
    assert!(result.customs.is_none());
    assert!(result.requirements.is_none());
    assert!(result.price_estimate.is_none());
    assert!(result.declaration_data.is_none());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["riskClassification"]["overall"], "BLOCKED");
    assert_eq!(
        json["riskClassification"]["reasons"],
        json!(result.compatibility.reasons)
    );
    assert!(json.get("customs").is_none());
}

#[test]
fn bus_weight_limit_cites_thirty_kg() {
    let mut trip = make_trip(TransportMode::Bus, "GB", "France");
    trip.available_kg = 50.0;
    let verdict = check_compatibility(&trip, &make_item("clothing", "coats", 40.0, 100.0));

    assert_eq!(verdict.status, CompatibilityStatus::No);
    assert!(verdict.reasons.iter().any(|r| r.contains("bus limit of 30kg")));
}

#[test]
fn electronics_to_nigeria_over_threshold() {
    let trip = make_trip(TransportMode::Air, "GB", "Nigeria");
    let item = make_item("electronics", "laptop", 2.0, 100_000.0);
    let customs = get_customs_compliance(&trip, &item, &CountryCode::new("GB"), 0.10);

    assert!(customs.exceeds_duty_free);
    assert_eq!(customs.currency, "NGN");
    assert_eq!(customs.estimated_duty, 20_000.0);
    assert_eq!(customs.estimated_vat, 9_000.0);
    assert_eq!(customs.total_taxes, 29_000.0);
    assert_eq!(customs.duty_rate, "20%");
}

#[test]
fn eu_to_nigeria_border_risk_with_duty_exposure() {
    let trip = make_trip(TransportMode::Air, "Spain", "NG");
    let item = make_item("clothing", "shirts", 1.0, 60_000.0);
    let scores = calculate_risk_scores(&trip, &item);

    assert_eq!(scores.details.route_key, "EU-NG");
    assert!(scores.details.exceeds_duty_free);
    assert_eq!(scores.border_customs_risk, 75);
}

#[test]
fn seasoned_traveler_scores_full_marks() {
    let traveler = Traveler {
        completed_trips: 10.0,
        cancellations: 0.0,
        rating: Some(5.0),
        ..Default::default()
    };
    assert_eq!(traveler_score(&traveler), 100.0);
}

#[test]
fn assessment_is_repeatable_for_fixed_time_and_seed() {
    let request = make_request(
        make_trip(TransportMode::Ship, "GB", "Kenya"),
        make_item("electronics", "phone", 1.5, 400.0),
    );
    let first = assess_fixed(&request);
    let second = assess_fixed(&request);
    assert_eq!(first, second);

    let mut other_rng = StdRng::seed_from_u64(7);
    let third = Assessor::default().assess_at(&request, make_now(), &mut other_rng);
    assert_eq!(first.confidence_score, third.confidence_score);
    assert_eq!(first.customs, third.customs);
    assert_eq!(first.price_estimate, third.price_estimate);
    assert_eq!(first.timestamp, "2030-06-01T09:30:00.000Z");
}

#[test]
fn scores_stay_in_bounds_for_extreme_inputs() {
    for (weight, value) in [(-5.0, -1e9), (0.0, 0.0), (1e9, 1e12), (0.1, f64::MAX)] {
        let mut trip = make_trip(TransportMode::Other("rocket".into()), "Atlantis", "Mars");
        trip.available_kg = f64::MAX;
        let item = make_item("valuables_high", "gold", weight, value);
        let scores = calculate_risk_scores(&trip, &item);
        for s in [
            scores.border_customs_risk,
            scores.delay_risk,
            scores.damage_risk,
            scores.confiscation_risk,
        ] {
            assert!(s <= 100);
        }
        let result = assess_fixed(&make_request(trip, item));
        assert!(result.confidence_score <= 100);
    }
}

#[test]
fn unknown_lookups_fall_back() {
    let trip = Trip {
        transport_mode: TransportMode::Other("zeppelin".into()),
        available_kg: 5.0,
        ..Default::default()
    };
    let item = Item {
        weight: 1.0,
        ..Default::default()
    };
    let result = assess_fixed(&make_request(trip, item));

    assert_eq!(result.compatibility.destination_country.as_str(), "DEFAULT");
    let customs = result.customs.unwrap();
    assert_eq!(customs.hs_code, "9403-9406");
    assert_eq!(customs.currency, "USD");
    let price = result.price_estimate.unwrap();
    assert_eq!(price.breakdown.price_per_kg, 10.0);
    assert_eq!(price.breakdown.days_until_trip, None);
    match result.risk_classification {
        RiskClassification::Scored(scores) => {
            assert_eq!(scores.details.route_key, "GB-DEFAULT");
            assert_eq!(scores.damage_risk, 25);
        }
        RiskClassification::Blocked { .. } => panic!("unexpectedly blocked"),
    }
}

#[test]
fn status_never_relaxes_after_no() {
    let mut trip = make_trip(TransportMode::Bus, "GB", "Nigeria");
    trip.available_kg = 1.0;
    let mut item = make_item("electronics", "weapons kit", 45.0, 10.0);
    item.dimensions = Some(Dimensions {
        length: 500.0,
        width: 500.0,
        height: 500.0,
    });
    let verdict = check_compatibility(&trip, &item);

    assert_eq!(verdict.status, CompatibilityStatus::No);
    assert!(verdict.reasons.iter().any(|r| r.contains("available capacity")));
    assert!(verdict.reasons.iter().any(|r| r.contains("Dimensions exceed")));
    assert!(!verdict.reasons.iter().any(|r| r.starts_with("Item has restrictions")));
}

#[test]
fn loose_request_json_is_normalized() {
    let raw: RawShipmentRequest = serde_json::from_value(json!({
        "trip": {
            "_id": "t-77",
            "travelMeans": "air",
            "fromCountry": "United Kingdom",
            "toCountry": "Ghana",
            "availableKg": "15",
            "departureDate": "2030-06-02T09:30:00Z"
        },
        "item": {
            "id": 12,
            "category": "Clothing",
            "type": "Dress",
            "weight": "3.5kg",
            "value": "80"
        },
        "traveler": {
            "firstName": "Kofi",
            "lastName": "Mensah",
            "averageRating": 4.8,
            "completedTrips": 12
        },
        "senderCountry": "Nigeria"
    }))
    .unwrap();
    let request = raw.normalize();
    assert_eq!(request.item.id.as_deref(), Some("12"));

    let result = assess_fixed(&request);
    assert_eq!(result.trip_id.as_deref(), Some("t-77"));
    assert_eq!(result.compatibility.destination_country.as_str(), "GH");
    let customs = result.customs.as_ref().unwrap();
    assert_eq!(customs.sender_country.as_str(), "NG");
    let price = result.price_estimate.as_ref().unwrap();
    assert_eq!(price.breakdown.weight_kg, 3.5);
    assert!(price.urgency_premium > 0.0);
    let declaration = result.declaration_data.as_ref().unwrap();
    assert_eq!(declaration.traveler.name, "Kofi Mensah");
    assert_eq!(declaration.traveler.rating, 4.8);
    assert_eq!(declaration.origin.country, "United Kingdom");
    assert!(declaration.shipment_id.starts_with("BGO-"));
}

#[test]
fn batch_json_filters_trips() {
    let raw: RawTripBatch = serde_json::from_value(json!({
        "trips": [
            {"id": "a", "mode": "air", "destinationCountry": "FR", "availableKg": 10},
            {"id": "b", "mode": "bus", "destinationCountry": "FR", "availableKg": 10},
            {"id": "c", "mode": "air", "destinationCountry": "FR", "availableKg": 1}
        ],
        "item": {"category": "toys", "type": "lighters_bulk", "weight": 2}
    }))
    .unwrap();
    let batch = raw.normalize();
    let kept = baggo_core::filter_compatible_trips(&batch.trips, &batch.item);
    let ids: Vec<_> = kept.iter().map(|t| t.trip.id.clone().unwrap()).collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn custom_config_changes_currency_and_prefix() {
    let config = AssessmentConfig::from_json(
        r#"{ "settlementCurrency": "GBP", "shipmentIdPrefix": "TST", "urgencyWindowDays": 0 }"#,
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let mut trip = make_trip(TransportMode::Air, "GB", "France");
    trip.departure = Some(make_now());
    let result = Assessor::new(config).assess_at(
        &make_request(trip, make_item("books", "novel", 1.0, 20.0)),
        make_now(),
        &mut rng,
    );
    let price = result.price_estimate.unwrap();
    assert_eq!(price.currency, "GBP");
    assert_eq!(price.urgency_premium, 0.0);
    assert!(result.declaration_data.unwrap().shipment_id.starts_with("TST-"));
}

#[test]
fn default_entry_point_runs() {
    let result = assess_shipment(&make_request(
        make_trip(TransportMode::Train, "DE", "FR"),
        make_item("books", "atlas", 1.0, 15.0),
    ));
    assert_eq!(result.compatibility.status, CompatibilityStatus::Yes);
    assert!(result.confidence_score > 0);
    assert_eq!(get_country_code("germany").as_str(), "DE");
}

#[test]
fn overall_class_uses_unrounded_average() {
    // 15 + 19.5 + 35 + 30 = 99.5, average 24.875; rounded scores average 25
    let trip = make_trip(TransportMode::Bus, "US", "CA");
    let item = make_item("personal", "wallet", 0.3, 0.0);
    let scores = calculate_risk_scores(&trip, &item);

    assert_eq!(scores.border_customs_risk, 15);
    assert_eq!(scores.delay_risk, 20);
    assert_eq!(scores.damage_risk, 35);
    assert_eq!(scores.confiscation_risk, 30);
    let rounded_sum = scores.border_customs_risk
        + scores.delay_risk
        + scores.damage_risk
        + scores.confiscation_risk;
    assert_eq!(RiskLevel::from_average(f64::from(rounded_sum) / 4.0), RiskLevel::Medium);
    assert_eq!(scores.overall, RiskLevel::Low);
}
