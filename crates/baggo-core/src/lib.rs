//! Shipment compatibility, risk and customs assessment for Baggo.
//!
//! This crate provides:
//! - Normalization of loosely shaped trip, item and traveller requests
//! - Compatibility checks against transport and destination rules
//! - Border, delay, damage and confiscation risk scores
//! - Delivery confidence, duty/VAT estimates, checklists and pricing
//! - Customs declaration payloads and bulk trip filtering
//!
//! Core invariants:
//! - Scoring never fails; unknown inputs fall back to documented defaults
//! - Compatibility severity only rises: `Yes` < `Conditional` < `No`
//! - A `No` verdict stops the assessment with confidence 0 and class `BLOCKED`
//! - All scores are integers in `[0, 100]`
//!
#![deny(missing_docs)]

/// Assessment pipeline and result types.
pub mod assessment;
/// Trip and item compatibility verdicts.
pub mod compatibility;
/// Delivery confidence scoring.
pub mod confidence;
/// Tunable assessment parameters.
pub mod config;
/// Duty and VAT exposure.
pub mod customs;
/// Customs declaration payload and text.
pub mod declaration;
/// Error types for core operations.
pub mod errors;
/// Bulk trip filtering.
pub mod filter;
/// Loose request shapes and normalization.
pub mod input;
/// Price estimates.
pub mod pricing;
/// Packaging, labelling, declaration and handling checklists.
pub mod requirements;
/// Risk scores and classes.
pub mod risk;
/// Canonical trip, item and traveller types.
pub mod shared;

pub use assessment::{assess_shipment, AssessmentResult, Assessor, RiskClassification};
pub use compatibility::{check_compatibility, Compatibility, CompatibilityStatus};
pub use confidence::{calculate_confidence_score, traveler_score};
pub use config::{AssessmentConfig, RiskWeights};
pub use customs::{customs_rules_for, get_customs_compliance, CustomsInfo};
pub use declaration::{
    generate_declaration_data, generate_declaration_text, generate_shipment_id, DeclarationData,
};
pub use errors::CoreError;
pub use filter::{
    filter_compatible_trips, quick_check_trips, quick_compatibility_check,
    search_compatible_trips, AndFilter, CompatibleTrip, QuickCheck, QuickCheckFilter,
    QuickCheckRow, RouteFilter, TripFilter,
};
pub use input::{RawShipmentRequest, RawTrip, RawTripBatch, TripBatch};
pub use pricing::{calculate_price_estimate, PriceEstimate};
pub use requirements::{generate_requirements, Requirements};
pub use risk::{calculate_risk_scores, RiskDetails, RiskLevel, RiskScores};
pub use shared::{Dimensions, Item, ShipmentRequest, Traveler, Trip};

/// Maps a free-text country name to its internal key (`"Nigeria"` -> `NG`).
pub fn get_country_code(name: &str) -> baggo_rules::CountryCode {
    baggo_rules::CountryCode::resolve(name)
}
