//! Customs declaration payload handed to document rendering.

use crate::customs::CustomsInfo;
use crate::shared::{Dimensions, Item, Traveler, Trip};
use baggo_rules::TransportMode;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::Serialize;

const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ID_SUFFIX_LEN: usize = 6;
const UNKNOWN: &str = "Unknown";

/// Generates a shipment identifier: `{prefix}-{epoch millis}-{6 base36 chars}`.
pub fn generate_shipment_id<R: Rng + ?Sized>(
    prefix: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}-{}", prefix, now.timestamp_millis(), suffix)
}

/// A city and country pair as printed on the declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// City, or `Unknown`.
    pub city: String,
    /// Country as supplied (either alias), or `Unknown`.
    pub country: String,
}

/// Goods section of the declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredItem {
    /// Type, description, or `General goods`.
    pub description: String,
    /// Category, or `general`.
    pub category: String,
    /// Units; unknown counts as one.
    pub quantity: f64,
    /// Weight in kilograms; 0 when unknown.
    pub weight: f64,
    /// Parcel size, if supplied.
    pub dimensions: Option<Dimensions>,
    /// Declared value.
    pub declared_value: f64,
    /// Destination currency.
    pub currency: String,
}

/// Customs section of the declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredCustoms {
    /// HS code or range.
    pub hs_code: String,
    /// HS description.
    pub hs_description: String,
    /// Estimated duty.
    pub estimated_duty: f64,
    /// Estimated VAT.
    #[serde(rename = "estimatedVAT")]
    pub estimated_vat: f64,
    /// Duty plus VAT.
    pub total_taxes: f64,
}

/// Traveller section of the declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredTraveler {
    /// Display name, or `Traveler`.
    pub name: String,
    /// Rating; 0 when unrated.
    pub rating: f64,
    /// Trips delivered.
    pub completed_trips: f64,
}

/// Everything needed to render a customs declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationData {
    /// Unique shipment identifier.
    pub shipment_id: String,
    /// RFC 3339 generation time.
    pub generated_at: String,
    /// Where the goods leave from.
    pub origin: Place,
    /// Where the goods go.
    pub destination: Place,
    /// Mode of transport.
    pub transport_mode: TransportMode,
    /// Departure time, if known.
    pub departure_date: Option<String>,
    /// Goods.
    pub item: DeclaredItem,
    /// Customs figures.
    pub customs: DeclaredCustoms,
    /// Carrier.
    pub traveler: DeclaredTraveler,
    /// Statement the traveller signs.
    pub declaration_text: String,
}

fn or_unknown(value: Option<&str>) -> String {
    value.unwrap_or(UNKNOWN).to_string()
}

/// Assembles the declaration payload as of `now`.
pub fn generate_declaration_data<R: Rng + ?Sized>(
    trip: &Trip,
    item: &Item,
    customs: &CustomsInfo,
    traveler: &Traveler,
    shipment_prefix: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> DeclarationData {
    DeclarationData {
        shipment_id: generate_shipment_id(shipment_prefix, now, rng),
        generated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        origin: Place {
            city: or_unknown(trip.origin_city.as_deref()),
            country: or_unknown(trip.origin_country.as_deref()),
        },
        destination: Place {
            city: or_unknown(trip.destination_city.as_deref()),
            country: or_unknown(trip.destination_country.as_deref()),
        },
        transport_mode: trip.transport_mode.clone(),
        departure_date: trip
            .departure
            .map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        item: DeclaredItem {
            description: item.label().to_string(),
            category: item.category.clone().unwrap_or_else(|| "general".to_string()),
            quantity: item.units(),
            weight: item.weight,
            dimensions: item.dimensions,
            declared_value: customs.declared_value,
            currency: customs.currency.clone(),
        },
        customs: DeclaredCustoms {
            hs_code: customs.hs_code.clone(),
            hs_description: customs.hs_description.clone(),
            estimated_duty: customs.estimated_duty,
            estimated_vat: customs.estimated_vat,
            total_taxes: customs.total_taxes,
        },
        traveler: DeclaredTraveler {
            name: traveler.name.clone().unwrap_or_else(|| "Traveler".to_string()),
            rating: traveler.rating.unwrap_or(0.0),
            completed_trips: traveler.completed_trips,
        },
        declaration_text: generate_declaration_text(item, customs),
    }
}

/// The statement a traveller signs at the border.
pub fn generate_declaration_text(item: &Item, customs: &CustomsInfo) -> String {
    let currency = &customs.currency;
    let weight = if item.weight == 0.0 {
        "Not specified".to_string()
    } else {
        item.weight.to_string()
    };
    let threshold_note = if customs.exceeds_duty_free {
        format!(
            "Note: This shipment exceeds the duty-free threshold of {currency} {}. \n   \
             Estimated duties and taxes may apply: {currency} {}",
            customs.duty_free_threshold, customs.total_taxes
        )
    } else {
        "This shipment is within the duty-free threshold.".to_string()
    };

    format!(
        "I declare that I am carrying the following goods for personal delivery:\n\
         \n\
         Item: {}\n\
         Quantity: {}\n\
         Weight: {} kg\n\
         Declared Value: {currency} {}\n\
         \n\
         HS Code: {}\n\
         Category: {}\n\
         \n\
         I confirm that:\n\
         1. This item is not prohibited for import/export\n\
         2. The declared value is accurate and true\n\
         3. I am transporting this item on behalf of a third party\n\
         4. I will comply with all customs regulations\n\
         \n\
         {}",
        item.label(),
        item.units(),
        weight,
        customs.declared_value,
        customs.hs_code,
        customs.hs_description,
        threshold_note,
    )
}
