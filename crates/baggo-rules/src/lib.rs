//! Static reference tables for Baggo shipment assessment.
//!
//! Everything here is process-lifetime, read-only data: HS classifications,
//! the universal prohibited list, per-mode carriage rules, per-country
//! customs rules, item and corridor risk scores, and duty schedules. Every
//! lookup has a documented fallback, so no lookup can fail.
//!
#![deny(missing_docs)]

/// Per-country customs rules and the universal prohibited list.
pub mod countries;
/// Duty schedules and the fixed-or-varies rate type.
pub mod duty;
/// HS classification entries.
pub mod hs_codes;
/// Country and transport-mode identifiers.
pub mod identifiers;
/// Substring keyword matching over rule lists.
pub mod matcher;
/// Restriction entries shared by transport and country rules.
pub mod restriction;
/// Item-category and corridor risk scores.
pub mod risk_tables;
/// Per-mode carriage rules.
pub mod transport;
/// Validation errors for identifiers and rates.
pub mod validation;

pub use countries::{
    all_country_rules, country_rules, CountryRules, ProcessingDays, DEFAULT_COUNTRY_RULES,
    UNIVERSAL_PROHIBITED,
};
pub use duty::{duty_rate, format_percent, DutyRate, DutySchedule, FALLBACK_DUTY_RATE};
pub use hs_codes::{hs_code, hs_codes, HsCodeEntry};
pub use identifiers::{CountryCode, TransportMode};
pub use matcher::{all_matches, first_match, ItemTerms, KeywordRule};
pub use restriction::{Allowance, Limits, RestrictionNote};
pub use risk_tables::{
    item_risk_score, route_key, route_risk, DEFAULT_ITEM_RISK, DEFAULT_ROUTE_RISK,
    FRAGILE_CATEGORIES,
};
pub use transport::{all_transport_rules, transport_rules, MaxDimensions, TransportRules};
pub use validation::ValidationError;
