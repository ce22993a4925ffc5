use crate::config::RiskWeights;
use crate::risk::RiskScores;
use crate::shared::{round_half_up, Traveler};

/// Rating assumed for travellers who have not been rated.
const NEUTRAL_RATING: f64 = 3.0;

/// Reliability of a traveller from their history, in `[0, 100]`.
///
/// Fifty points to start, five per completed trip up to a hundred, minus
/// ten per cancellation, plus or minus ten per rating point from neutral.
pub fn traveler_score(traveler: &Traveler) -> f64 {
    let history = (traveler.completed_trips * 5.0).min(100.0);
    let penalty = traveler.cancellations * 10.0;
    let rating = traveler.rating.unwrap_or(NEUTRAL_RATING);
    (history - penalty + (rating - NEUTRAL_RATING) * 10.0 + 50.0).clamp(0.0, 100.0)
}

/// Likelihood of successful delivery, 0-100.
///
/// Weighted blend of traveller reliability and the inverted confiscation,
/// border and delay risks. Uses the rounded sub-scores.
pub fn calculate_confidence_score(
    risk: &RiskScores,
    traveler: &Traveler,
    weights: &RiskWeights,
) -> u32 {
    let item_score = 100.0 - f64::from(risk.confiscation_risk);
    let route_score = 100.0 - f64::from(risk.border_customs_risk);
    let transport_score = 100.0 - f64::from(risk.delay_risk);

    let blended = traveler_score(traveler) * weights.traveler_reliability
        + item_score * weights.item_category_risk
        + route_score * weights.route_risk
        + transport_score * weights.transport_mode_risk;

    round_half_up(blended.clamp(0.0, 100.0)) as u32
}
