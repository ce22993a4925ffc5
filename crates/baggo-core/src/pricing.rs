use crate::config::AssessmentConfig;
use crate::risk::RiskScores;
use crate::shared::{round_cents, round_half_up, Item, Trip};
use baggo_rules::TransportMode;
use chrono::{DateTime, Utc};
use serde::Serialize;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// How the base price was built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Charged weight; an unknown weight is charged as one kilogram.
    pub weight_kg: f64,
    /// Rate for the trip's mode.
    pub price_per_kg: f64,
    /// Mode the rate was taken from.
    pub transport_mode: TransportMode,
    /// Whole days until departure; `None` when the departure is unknown.
    pub days_until_trip: Option<i64>,
}

/// Suggested shipping price in the settlement currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    /// Rate times weight.
    pub base_price: f64,
    /// Up to half the base price, scaled by border and confiscation risk.
    pub risk_premium: f64,
    /// Surcharge for trips leaving soon.
    pub urgency_premium: f64,
    /// Sum of the three components.
    pub total_price: f64,
    /// Settlement currency.
    pub currency: String,
    /// Inputs.
    pub breakdown: PriceBreakdown,
}

/// Per-kilogram rate for a mode.
pub fn price_per_kg(mode: &TransportMode) -> f64 {
    match mode {
        TransportMode::Air => 15.0,
        TransportMode::Bus => 8.0,
        TransportMode::Ship => 5.0,
        TransportMode::Train => 10.0,
        TransportMode::Car => 12.0,
        TransportMode::Other(_) => 10.0,
    }
}

/// Prices a shipment as of `now`.
pub fn calculate_price_estimate(
    trip: &Trip,
    item: &Item,
    risk: &RiskScores,
    config: &AssessmentConfig,
    now: DateTime<Utc>,
) -> PriceEstimate {
    let weight = if item.weight == 0.0 { 1.0 } else { item.weight };
    let rate = price_per_kg(&trip.transport_mode);
    let base = rate * weight;

    let average_risk = f64::from(risk.border_customs_risk + risk.confiscation_risk) / 2.0;
    let risk_premium = base * (average_risk / 200.0);

    let days = trip.departure.map(|departure| {
        let seconds = (departure - now).num_milliseconds() as f64 / 1000.0;
        (seconds / SECONDS_PER_DAY).max(0.0)
    });
    let urgent = days.is_some_and(|d| d < config.urgency_window_days as f64);
    let urgency_premium = if urgent { base * config.urgency_rate } else { 0.0 };

    PriceEstimate {
        base_price: round_cents(base),
        risk_premium: round_cents(risk_premium),
        urgency_premium: round_cents(urgency_premium),
        total_price: round_cents(base + risk_premium + urgency_premium),
        currency: config.settlement_currency.clone(),
        breakdown: PriceBreakdown {
            weight_kg: weight,
            price_per_kg: rate,
            transport_mode: trip.transport_mode.clone(),
            days_until_trip: days.map(|d| round_half_up(d) as i64),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{RiskDetails, RiskLevel};
    use chrono::{Duration, TimeZone};

    fn risk(border: u32, confiscation: u32) -> RiskScores {
        RiskScores {
            border_customs_risk: border,
            delay_risk: 0,
            damage_risk: 0,
            confiscation_risk: confiscation,
            overall: RiskLevel::Low,
            details: RiskDetails {
                route_key: "GB-FR".into(),
                exceeds_duty_free: false,
                is_fragile: false,
                has_restrictions: false,
            },
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap()
    }

    fn trip(mode: TransportMode, departs_in: Option<Duration>) -> Trip {
        Trip {
            transport_mode: mode,
            departure: departs_in.map(|d| now() + d),
            ..Default::default()
        }
    }

    #[test]
    fn bus_trip_next_month() {
        let item = Item {
            weight: 2.0,
            ..Default::default()
        };
        let estimate = calculate_price_estimate(
            &trip(TransportMode::Bus, Some(Duration::days(30))),
            &item,
            &risk(40, 60),
            &AssessmentConfig::default(),
            now(),
        );
        assert_eq!(estimate.base_price, 16.0);
        assert_eq!(estimate.risk_premium, 4.0);
        assert_eq!(estimate.urgency_premium, 0.0);
        assert_eq!(estimate.total_price, 20.0);
        assert_eq!(estimate.currency, "EUR");
        assert_eq!(estimate.breakdown.days_until_trip, Some(30));
    }

    #[test]
    fn imminent_trip_pays_urgency_and_unknown_weight_is_one_kg() {
        let estimate = calculate_price_estimate(
            &trip(TransportMode::Air, Some(Duration::hours(30))),
            &Item::default(),
            &risk(0, 0),
            &AssessmentConfig::default(),
            now(),
        );
        assert_eq!(estimate.breakdown.weight_kg, 1.0);
        assert_eq!(estimate.base_price, 15.0);
        assert_eq!(estimate.urgency_premium, 3.75);
        assert_eq!(estimate.total_price, 18.75);
        assert_eq!(estimate.breakdown.days_until_trip, Some(1));
    }

    #[test]
    fn past_departure_counts_as_zero_days() {
        let estimate = calculate_price_estimate(
            &trip(TransportMode::Ship, Some(Duration::days(-4))),
            &Item::default(),
            &risk(0, 0),
            &AssessmentConfig::default(),
            now(),
        );
        assert_eq!(estimate.breakdown.days_until_trip, Some(0));
        assert_eq!(estimate.urgency_premium, 1.25);
    }

    #[test]
    fn unknown_departure_has_no_urgency() {
        let estimate = calculate_price_estimate(
            &trip(TransportMode::Other("tuk-tuk".into()), None),
            &Item::default(),
            &risk(0, 0),
            &AssessmentConfig::default(),
            now(),
        );
        assert_eq!(estimate.breakdown.price_per_kg, 10.0);
        assert_eq!(estimate.breakdown.days_until_trip, None);
        assert_eq!(estimate.urgency_premium, 0.0);
        let json = serde_json::to_value(&estimate).unwrap();
        assert!(json["breakdown"]["daysUntilTrip"].is_null());
    }
}
