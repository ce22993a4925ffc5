use crate::shared::{round_cents, Item, Trip};
use baggo_rules::{
    all_matches, country_rules, duty_rate, format_percent, hs_code, CountryCode, CountryRules,
    RestrictionNote,
};
use serde::Serialize;
use tracing::debug;

/// Customs-facing summary of duty and VAT exposure for one shipment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomsInfo {
    /// Resolved destination key.
    pub destination_country: CountryCode,
    /// Sender's country key.
    pub sender_country: CountryCode,
    /// HS code or code range.
    pub hs_code: String,
    /// HS description.
    pub hs_description: String,
    /// HS category.
    pub category: String,
    /// Declared value in the destination currency.
    pub declared_value: f64,
    /// Destination currency.
    pub currency: String,
    /// Value above which duty and VAT apply.
    pub duty_free_threshold: f64,
    /// Declared value is strictly above the threshold.
    pub exceeds_duty_free: bool,
    /// Duty estimate, to the cent.
    pub estimated_duty: f64,
    /// VAT estimate on value plus duty, to the cent.
    #[serde(rename = "estimatedVAT")]
    pub estimated_vat: f64,
    /// Duty plus VAT, to the cent.
    pub total_taxes: f64,
    /// VAT rate as a percentage, e.g. `20%`.
    pub vat_rate: String,
    /// Duty rate as a percentage, or `varies`.
    pub duty_rate: String,
    /// Documents the destination asks for.
    pub required_documents: Vec<String>,
    /// Destination restrictions that apply to the item.
    pub restrictions: Vec<RestrictionNote>,
}

/// Rules for a destination named in free text (`"Nigeria"`, `"uk"`, `"FR"`).
pub fn customs_rules_for(country: &str) -> &'static CountryRules {
    country_rules(&CountryCode::resolve(country))
}

/// Computes duty and VAT exposure for sending `item` on `trip`.
///
/// Nothing is owed at or below the duty-free threshold. Above it, duty is
/// charged on the declared value and VAT on value plus duty. A `varies`
/// rate is estimated at `varies_fallback` but reported as `varies`.
pub fn get_customs_compliance(
    trip: &Trip,
    item: &Item,
    sender_country: &CountryCode,
    varies_fallback: f64,
) -> CustomsInfo {
    let destination = trip.destination_code();
    let rules = country_rules(&destination);
    let terms = item.terms();
    let hs = hs_code(terms.category());
    let rate = duty_rate(terms.category(), &destination);

    let value = item.value;
    let exceeds_duty_free = value > rules.duty_free_threshold;
    let (duty, vat) = if exceeds_duty_free {
        let duty = value * rate.estimate_rate(varies_fallback);
        (duty, (value + duty) * rules.vat_rate)
    } else {
        (0.0, 0.0)
    };
    let estimated_duty = round_cents(duty);
    let estimated_vat = round_cents(vat);

    debug!(
        destination = %destination,
        exceeds_duty_free,
        estimated_duty,
        estimated_vat,
        "customs resolved"
    );

    CustomsInfo {
        destination_country: destination,
        sender_country: sender_country.clone(),
        hs_code: hs.code.to_string(),
        hs_description: hs.description.to_string(),
        category: hs.category.to_string(),
        declared_value: value,
        currency: rules.currency.to_string(),
        duty_free_threshold: rules.duty_free_threshold,
        exceeds_duty_free,
        estimated_duty,
        estimated_vat,
        total_taxes: round_cents(estimated_duty + estimated_vat),
        vat_rate: format_percent(rules.vat_rate),
        duty_rate: rate.label(),
        required_documents: rules.documentation.iter().map(|d| d.to_string()).collect(),
        restrictions: all_matches(&terms, rules.restricted).cloned().collect(),
    }
}
