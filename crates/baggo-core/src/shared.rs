use baggo_rules::{CountryCode, ItemTerms, TransportMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Origin assumed for corridor risk when a trip does not name one.
pub const DEFAULT_ORIGIN: &str = "GB";

/// Parcel size in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Longest side.
    pub length: f64,
    /// Second side.
    pub width: f64,
    /// Third side.
    pub height: f64,
}

/// A traveller's planned journey with spare luggage capacity.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Caller-side identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// How the traveller moves.
    pub transport_mode: TransportMode,
    /// Origin country as supplied (name or code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,
    /// Destination country as supplied (name or code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_country: Option<String>,
    /// Origin city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_city: Option<String>,
    /// Destination city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_city: Option<String>,
    /// Spare capacity in kilograms.
    pub available_kg: f64,
    /// Departure time, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<DateTime<Utc>>,
    /// Fields the engine does not read, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Trip {
    /// Resolved destination key; `DEFAULT` when absent or unknown.
    pub fn destination_code(&self) -> CountryCode {
        CountryCode::resolve_opt(self.destination_country.as_deref())
    }

    /// Resolved origin key; trips without an origin are assumed to leave from GB.
    pub fn origin_code(&self) -> CountryCode {
        CountryCode::resolve(self.origin_country.as_deref().unwrap_or(DEFAULT_ORIGIN))
    }
}

/// The parcel a sender wants carried.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Caller-side identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Category tag, e.g. `electronics`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text item type, e.g. `laptop`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Weight in kilograms; 0 when unknown.
    pub weight: f64,
    /// Declared value; 0 when unknown.
    pub value: f64,
    /// Number of units; 0 when unknown.
    pub quantity: f64,
    /// Parcel size, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl Item {
    /// Lowercased descriptors for keyword matching.
    pub fn terms(&self) -> ItemTerms {
        ItemTerms::new(self.category.as_deref(), self.kind.as_deref())
    }

    /// Text used to describe the goods on customs paperwork.
    pub fn label(&self) -> &str {
        self.kind
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("General goods")
    }

    /// Units declared; an unknown quantity counts as one.
    pub fn units(&self) -> f64 {
        if self.quantity == 0.0 {
            1.0
        } else {
            self.quantity
        }
    }
}

/// The person carrying the parcel.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Traveler {
    /// Caller-side identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Trips delivered so far.
    pub completed_trips: f64,
    /// Trips cancelled so far.
    pub cancellations: f64,
    /// Average rating out of five, when rated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// One candidate pairing of trip, item and traveller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShipmentRequest {
    /// Trip the item would travel on.
    pub trip: Trip,
    /// Item to be carried.
    pub item: Item,
    /// Traveller who owns the trip.
    pub traveler: Traveler,
    /// Sender's country; the configured default applies when absent.
    pub sender_country: Option<CountryCode>,
}

/// Rounds half-way cases towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds a monetary amount to cents.
pub(crate) fn round_cents(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Clamps to `[0, 100]` and rounds to a whole score.
pub(crate) fn score(value: f64) -> u32 {
    round_half_up(value.clamp(0.0, 100.0)) as u32
}
