use crate::shared::{score, Item, Trip};
use baggo_rules::{
    all_matches, country_rules, item_risk_score, route_key, route_risk, TransportMode,
    FRAGILE_CATEGORIES,
};
use serde::Serialize;
use tracing::debug;

/// Processing time assumed when the destination has no figure for the mode.
const DEFAULT_PROCESSING_DAYS: u32 = 2;

/// Qualitative risk class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Average below 25.
    Low,
    /// Average in `[25, 50)`.
    Medium,
    /// Average in `[50, 75)`.
    High,
    /// Average of 75 or more.
    VeryHigh,
    /// Shipment is not compatible; nothing was scored.
    Blocked,
}

impl RiskLevel {
    /// Buckets an average sub-score; each threshold belongs to the upper class.
    pub fn from_average(average: f64) -> Self {
        if average < 25.0 {
            RiskLevel::Low
        } else if average < 50.0 {
            RiskLevel::Medium
        } else if average < 75.0 {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }

    /// Display form (`LOW`, `VERY_HIGH`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::VeryHigh => "VERY_HIGH",
            RiskLevel::Blocked => "BLOCKED",
        }
    }
}

/// Inputs that drove the risk scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDetails {
    /// Corridor key, e.g. `GB-NG`.
    pub route_key: String,
    /// Declared value is above the destination's duty-free threshold.
    pub exceeds_duty_free: bool,
    /// Category is in the fragile set.
    pub is_fragile: bool,
    /// Item matches a destination restriction.
    pub has_restrictions: bool,
}

/// Four independent 0-100 risk scores and their overall class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScores {
    /// Corridor risk plus duty-free exposure.
    pub border_customs_risk: u32,
    /// Clearance time and corridor risk.
    pub delay_risk: u32,
    /// Mode handling risk plus fragility.
    pub damage_risk: u32,
    /// Category risk plus restriction and duty-free exposure.
    pub confiscation_risk: u32,
    /// Class of the unrounded average.
    pub overall: RiskLevel,
    /// Scoring inputs.
    pub details: RiskDetails,
}

fn base_damage_risk(mode: &TransportMode) -> f64 {
    match mode {
        TransportMode::Air => 20.0,
        TransportMode::Bus => 35.0,
        TransportMode::Ship => 30.0,
        TransportMode::Train => 25.0,
        TransportMode::Car => 15.0,
        TransportMode::Other(_) => 25.0,
    }
}

/// True when the category contains any fragile tag.
pub fn is_fragile(category: &str) -> bool {
    FRAGILE_CATEGORIES.iter().any(|tag| category.contains(tag))
}

/// Scores border, delay, damage and confiscation risk for a pairing.
///
/// Sub-scores are clamped to `[0, 100]` and rounded for output; the overall
/// class is taken from the unrounded values.
pub fn calculate_risk_scores(trip: &Trip, item: &Item) -> RiskScores {
    let destination = trip.destination_code();
    let key = route_key(&trip.origin_code(), &destination);
    let corridor = f64::from(route_risk(&key));
    let country = country_rules(&destination);
    let terms = item.terms();

    let exceeds_duty_free = item.value > country.duty_free_threshold;
    let border = (corridor + if exceeds_duty_free { 20.0 } else { 0.0 }).clamp(0.0, 100.0);

    let days = country
        .processing_days
        .for_mode(&trip.transport_mode)
        .unwrap_or(DEFAULT_PROCESSING_DAYS);
    let delay = (f64::from(days) * 15.0 + corridor * 0.3).clamp(0.0, 100.0);

    let fragile = is_fragile(terms.category());
    let damage = (base_damage_risk(&trip.transport_mode) + if fragile { 25.0 } else { 0.0 })
        .clamp(0.0, 100.0);

    let has_restrictions = all_matches(&terms, country.restricted).next().is_some();
    let confiscation = (f64::from(item_risk_score(terms.category()))
        + if has_restrictions { 30.0 } else { 0.0 }
        + if exceeds_duty_free { 10.0 } else { 0.0 })
    .clamp(0.0, 100.0);

    let overall = RiskLevel::from_average((border + delay + damage + confiscation) / 4.0);
    debug!(route = %key, overall = overall.as_str(), "risk scored");

    RiskScores {
        border_customs_risk: score(border),
        delay_risk: score(delay),
        damage_risk: score(damage),
        confiscation_risk: score(confiscation),
        overall,
        details: RiskDetails {
            route_key: key,
            exceeds_duty_free,
            is_fragile: fragile,
            has_restrictions,
        },
    }
}
