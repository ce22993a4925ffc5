//! Tunable assessment parameters.
//!
//! Every field has a serde default, so a config file only needs the values
//! it overrides.

use crate::errors::CoreError;
use baggo_rules::{CountryCode, ValidationError, FALLBACK_DUTY_RATE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Weights of the four confidence components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskWeights {
    /// Weight of the traveller's reliability score.
    #[serde(default = "default_traveler_reliability")]
    pub traveler_reliability: f64,
    /// Weight of the inverted confiscation risk.
    #[serde(default = "default_item_category_risk")]
    pub item_category_risk: f64,
    /// Weight of the inverted border-customs risk.
    #[serde(default = "default_route_risk")]
    pub route_risk: f64,
    /// Weight of the inverted delay risk.
    #[serde(default = "default_transport_mode_risk")]
    pub transport_mode_risk: f64,
}

fn default_traveler_reliability() -> f64 {
    0.30
}

fn default_item_category_risk() -> f64 {
    0.25
}

fn default_route_risk() -> f64 {
    0.25
}

fn default_transport_mode_risk() -> f64 {
    0.20
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            traveler_reliability: default_traveler_reliability(),
            item_category_risk: default_item_category_risk(),
            route_risk: default_route_risk(),
            transport_mode_risk: default_transport_mode_risk(),
        }
    }
}

impl RiskWeights {
    /// Sum of all four weights.
    pub fn total(&self) -> f64 {
        self.traveler_reliability
            + self.item_category_risk
            + self.route_risk
            + self.transport_mode_risk
    }

    fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("riskWeights.travelerReliability", self.traveler_reliability),
            ("riskWeights.itemCategoryRisk", self.item_category_risk),
            ("riskWeights.routeRisk", self.route_risk),
            ("riskWeights.transportModeRisk", self.transport_mode_risk),
        ]
    }
}

/// Configuration for the assessment engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentConfig {
    /// Confidence component weights.
    #[serde(default)]
    pub risk_weights: RiskWeights,

    /// Sender country used when a request names none.
    #[serde(default = "default_sender_country")]
    pub default_sender_country: String,

    /// Trips departing in fewer days than this pay the urgency premium.
    #[serde(default = "default_urgency_window_days")]
    pub urgency_window_days: i64,

    /// Urgency premium as a fraction of the base price.
    #[serde(default = "default_urgency_rate")]
    pub urgency_rate: f64,

    /// Duty rate assumed when the schedule says `varies`.
    #[serde(default = "default_varies_duty_fallback")]
    pub varies_duty_fallback: f64,

    /// Currency of price estimates.
    #[serde(default = "default_settlement_currency")]
    pub settlement_currency: String,

    /// Prefix of generated shipment identifiers.
    #[serde(default = "default_shipment_id_prefix")]
    pub shipment_id_prefix: String,
}

fn default_sender_country() -> String {
    "GB".to_string()
}

fn default_urgency_window_days() -> i64 {
    3
}

fn default_urgency_rate() -> f64 {
    0.25
}

fn default_varies_duty_fallback() -> f64 {
    FALLBACK_DUTY_RATE
}

fn default_settlement_currency() -> String {
    "EUR".to_string()
}

fn default_shipment_id_prefix() -> String {
    "BGO".to_string()
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            risk_weights: RiskWeights::default(),
            default_sender_country: default_sender_country(),
            urgency_window_days: default_urgency_window_days(),
            urgency_rate: default_urgency_rate(),
            varies_duty_fallback: default_varies_duty_fallback(),
            settlement_currency: default_settlement_currency(),
            shipment_id_prefix: default_shipment_id_prefix(),
        }
    }
}

impl AssessmentConfig {
    /// Load and validate configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects negative or non-finite rates and weights and malformed codes.
    pub fn validate(&self) -> Result<(), CoreError> {
        let rates = [
            ("urgencyRate", self.urgency_rate),
            ("variesDutyFallback", self.varies_duty_fallback),
        ];
        for (field, value) in self.risk_weights.fields().into_iter().chain(rates) {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::OutOfBounds {
                    field,
                    value: value.to_string(),
                }
                .into());
            }
        }
        if self.urgency_window_days < 0 {
            return Err(ValidationError::OutOfBounds {
                field: "urgencyWindowDays",
                value: self.urgency_window_days.to_string(),
            }
            .into());
        }
        CountryCode::parse(self.default_sender_country.as_str())?;
        if self.shipment_id_prefix.is_empty() {
            return Err(CoreError::Config("shipmentIdPrefix must not be empty".into()));
        }

        let total = self.risk_weights.total();
        if (total - 1.0).abs() > 1e-9 {
            warn!(total, "risk weights do not sum to 1");
        }
        Ok(())
    }

    /// Sender country as an internal key.
    pub fn sender_country(&self) -> CountryCode {
        CountryCode::resolve(&self.default_sender_country)
    }
}
