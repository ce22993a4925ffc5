use crate::compatibility::{check_compatibility, Compatibility, CompatibilityStatus};
use crate::confidence::calculate_confidence_score;
use crate::config::AssessmentConfig;
use crate::customs::{get_customs_compliance, CustomsInfo};
use crate::declaration::{generate_declaration_data, DeclarationData};
use crate::pricing::{calculate_price_estimate, PriceEstimate};
use crate::requirements::{generate_requirements, Requirements};
use crate::risk::{calculate_risk_scores, RiskLevel, RiskScores};
use crate::shared::ShipmentRequest;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

/// Risk section of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RiskClassification {
    /// Shipment was scored.
    Scored(RiskScores),
    /// Shipment is incompatible; carries the compatibility reasons.
    Blocked {
        /// Always [`RiskLevel::Blocked`].
        overall: RiskLevel,
        /// Why the shipment was blocked.
        reasons: Vec<String>,
    },
}

impl RiskClassification {
    /// Overall class.
    pub fn overall(&self) -> RiskLevel {
        match self {
            RiskClassification::Scored(scores) => scores.overall,
            RiskClassification::Blocked { overall, .. } => *overall,
        }
    }
}

/// Full result of assessing one shipment.
///
/// Blocked shipments carry only the identifiers, compatibility and risk
/// sections; every later stage is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// RFC 3339 time of assessment.
    pub timestamp: String,
    /// Trip identifier, if supplied.
    pub trip_id: Option<String>,
    /// Item identifier, if supplied.
    pub item_id: Option<String>,
    /// Traveller identifier, if supplied.
    pub traveler_id: Option<String>,
    /// Compatibility verdict.
    pub compatibility: Compatibility,
    /// Risk scores, or the blocked marker.
    pub risk_classification: RiskClassification,
    /// Delivery confidence, 0-100; 0 when blocked.
    pub confidence_score: u32,
    /// Duty and VAT exposure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs: Option<CustomsInfo>,
    /// Checklists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
    /// Suggested price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_estimate: Option<PriceEstimate>,
    /// Declaration payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_data: Option<DeclarationData>,
}

impl AssessmentResult {
    /// True when compatibility was `No` and scoring stopped.
    pub fn is_blocked(&self) -> bool {
        self.compatibility.status == CompatibilityStatus::No
    }
}

/// Runs the assessment pipeline under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Assessor {
    config: AssessmentConfig,
}

impl Assessor {
    /// Creates an assessor with the given configuration.
    pub fn new(config: AssessmentConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Assesses a shipment using the current time and thread-local randomness.
    pub fn assess(&self, request: &ShipmentRequest) -> AssessmentResult {
        self.assess_at(request, Utc::now(), &mut rand::thread_rng())
    }

    /// Assesses a shipment as of `now`, drawing the shipment id from `rng`.
    ///
    /// Stages run in order: compatibility, risk, confidence, customs,
    /// requirements, price and declaration. An incompatible shipment stops
    /// after compatibility with confidence 0 and a `BLOCKED` class.
    pub fn assess_at<R: Rng + ?Sized>(
        &self,
        request: &ShipmentRequest,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> AssessmentResult {
        let ShipmentRequest {
            trip,
            item,
            traveler,
            sender_country,
        } = request;
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let compatibility = check_compatibility(trip, item);

        if compatibility.status == CompatibilityStatus::No {
            info!(
                trip = trip.id.as_deref().unwrap_or("-"),
                item = item.id.as_deref().unwrap_or("-"),
                "shipment blocked"
            );
            let reasons = compatibility.reasons.clone();
            return AssessmentResult {
                timestamp,
                trip_id: trip.id.clone(),
                item_id: item.id.clone(),
                traveler_id: traveler.id.clone(),
                compatibility,
                risk_classification: RiskClassification::Blocked {
                    overall: RiskLevel::Blocked,
                    reasons,
                },
                confidence_score: 0,
                customs: None,
                requirements: None,
                price_estimate: None,
                declaration_data: None,
            };
        }

        let risk = calculate_risk_scores(trip, item);
        let confidence = calculate_confidence_score(&risk, traveler, &self.config.risk_weights);
        debug!(confidence, overall = risk.overall.as_str(), "shipment scored");

        let sender = sender_country
            .clone()
            .unwrap_or_else(|| self.config.sender_country());
        let customs =
            get_customs_compliance(trip, item, &sender, self.config.varies_duty_fallback);
        let requirements = generate_requirements(trip, item, &customs);
        let price = calculate_price_estimate(trip, item, &risk, &self.config, now);
        let declaration = generate_declaration_data(
            trip,
            item,
            &customs,
            traveler,
            &self.config.shipment_id_prefix,
            now,
            rng,
        );

        AssessmentResult {
            timestamp,
            trip_id: trip.id.clone(),
            item_id: item.id.clone(),
            traveler_id: traveler.id.clone(),
            compatibility,
            risk_classification: RiskClassification::Scored(risk),
            confidence_score: confidence,
            customs: Some(customs),
            requirements: Some(requirements),
            price_estimate: Some(price),
            declaration_data: Some(declaration),
        }
    }
}

/// Assesses a shipment with the default configuration.
pub fn assess_shipment(request: &ShipmentRequest) -> AssessmentResult {
    Assessor::default().assess(request)
}
