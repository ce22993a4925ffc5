//! Loose request shapes accepted at the boundary and their normalization.
//!
//! Callers send partially filled objects with alternate field names and
//! numbers that may arrive as strings. Everything is resolved here so the
//! scoring pipeline only ever sees [`Trip`], [`Item`] and [`Traveler`].

use crate::shared::{Dimensions, Item, ShipmentRequest, Traveler, Trip};
use baggo_rules::{CountryCode, TransportMode};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

const LEADING_NUMBER: &str = r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?";

/// A scalar of unknown type, as sent by loosely typed clients.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    /// JSON number.
    Number(f64),
    /// JSON string.
    Text(String),
    /// JSON boolean.
    Flag(bool),
    /// Arrays and objects.
    Other(Value),
}

impl LooseValue {
    /// Numeric reading: numbers as-is, strings by their leading number, else 0.
    pub fn number(&self) -> f64 {
        match self {
            LooseValue::Number(n) => *n,
            LooseValue::Text(s) => parse_leading_number(s).unwrap_or(0.0),
            LooseValue::Flag(_) | LooseValue::Other(_) => 0.0,
        }
    }

    /// Text reading; empty strings count as absent.
    pub fn text(&self) -> Option<String> {
        match self {
            LooseValue::Text(s) if s.is_empty() => None,
            LooseValue::Text(s) => Some(s.clone()),
            LooseValue::Number(n) => Some(n.to_string()),
            LooseValue::Flag(_) | LooseValue::Other(_) => None,
        }
    }

    /// Timestamp reading: RFC 3339, naive date-time or date (UTC), or epoch milliseconds.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            LooseValue::Number(ms) => Utc.timestamp_millis_opt(*ms as i64).single(),
            LooseValue::Text(s) => parse_timestamp(s.trim()),
            LooseValue::Flag(_) | LooseValue::Other(_) => None,
        }
    }
}

/// Parses the longest numeric prefix of `s` (`"12.5kg"` -> 12.5).
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let re = Regex::new(LEADING_NUMBER).expect("invalid regex");
    re.find(s)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn first_text(candidates: &[&Option<LooseValue>]) -> Option<String> {
    candidates
        .iter()
        .copied()
        .flatten()
        .find_map(LooseValue::text)
}

fn number(value: &Option<LooseValue>) -> f64 {
    value.as_ref().map(LooseValue::number).unwrap_or(0.0)
}

/// Trip as sent by clients.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrip {
    /// Document-store identifier (preferred over `id`).
    #[serde(rename = "_id")]
    pub underscore_id: Option<LooseValue>,
    /// Plain identifier.
    pub id: Option<LooseValue>,
    /// Transport mode (preferred over `mode`).
    pub travel_means: Option<LooseValue>,
    /// Transport mode.
    pub mode: Option<LooseValue>,
    /// Destination (preferred over `destinationCountry`).
    pub to_country: Option<LooseValue>,
    /// Destination.
    pub destination_country: Option<LooseValue>,
    /// Origin (preferred over `originCountry`).
    pub from_country: Option<LooseValue>,
    /// Origin.
    pub origin_country: Option<LooseValue>,
    /// Origin city (preferred over `from`).
    pub from_city: Option<LooseValue>,
    /// Origin city.
    pub from: Option<LooseValue>,
    /// Destination city (preferred over `to`).
    pub to_city: Option<LooseValue>,
    /// Destination city.
    pub to: Option<LooseValue>,
    /// Spare capacity in kilograms.
    pub available_kg: Option<LooseValue>,
    /// Departure (preferred over `date`).
    pub departure_date: Option<LooseValue>,
    /// Departure.
    pub date: Option<LooseValue>,
    /// Everything else.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawTrip {
    /// Resolves aliases into a [`Trip`].
    pub fn normalize(self) -> Trip {
        let mode = first_text(&[&self.travel_means, &self.mode])
            .map(|label| TransportMode::from_label(&label))
            .unwrap_or_default();
        let departure = [&self.departure_date, &self.date]
            .into_iter()
            .flatten()
            .find(|v| v.text().is_some())
            .and_then(LooseValue::timestamp);

        Trip {
            id: first_text(&[&self.underscore_id, &self.id]),
            transport_mode: mode,
            origin_country: first_text(&[&self.from_country, &self.origin_country]),
            destination_country: first_text(&[&self.to_country, &self.destination_country]),
            origin_city: first_text(&[&self.from_city, &self.from]),
            destination_city: first_text(&[&self.to_city, &self.to]),
            available_kg: number(&self.available_kg),
            departure,
            extra: self.extra,
        }
    }
}

/// Dimensions as sent by clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDimensions {
    /// Length in centimetres.
    pub length: Option<LooseValue>,
    /// Width in centimetres.
    pub width: Option<LooseValue>,
    /// Height in centimetres.
    pub height: Option<LooseValue>,
}

/// Item as sent by clients.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Document-store identifier (preferred over `id`).
    #[serde(rename = "_id")]
    pub underscore_id: Option<LooseValue>,
    /// Plain identifier.
    pub id: Option<LooseValue>,
    /// Category tag.
    pub category: Option<LooseValue>,
    /// Item type.
    #[serde(rename = "type")]
    pub kind: Option<LooseValue>,
    /// Description.
    pub description: Option<LooseValue>,
    /// Weight in kilograms.
    pub weight: Option<LooseValue>,
    /// Declared value.
    pub value: Option<LooseValue>,
    /// Unit count.
    pub quantity: Option<LooseValue>,
    /// Parcel size.
    pub dimensions: Option<RawDimensions>,
}

impl RawItem {
    /// Resolves aliases and parses numbers into an [`Item`].
    pub fn normalize(self) -> Item {
        Item {
            id: first_text(&[&self.underscore_id, &self.id]),
            category: first_text(&[&self.category]),
            kind: first_text(&[&self.kind]),
            description: first_text(&[&self.description]),
            weight: number(&self.weight),
            value: number(&self.value),
            quantity: number(&self.quantity),
            dimensions: self.dimensions.map(|d| Dimensions {
                length: number(&d.length),
                width: number(&d.width),
                height: number(&d.height),
            }),
        }
    }
}

/// Traveller as sent by clients.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTraveler {
    /// Document-store identifier (preferred over `id`).
    #[serde(rename = "_id")]
    pub underscore_id: Option<LooseValue>,
    /// Plain identifier.
    pub id: Option<LooseValue>,
    /// Given name.
    pub first_name: Option<LooseValue>,
    /// Family name.
    pub last_name: Option<LooseValue>,
    /// Full name, used when no given name is present.
    pub name: Option<LooseValue>,
    /// Trips delivered.
    pub completed_trips: Option<LooseValue>,
    /// Trips cancelled.
    pub cancellations: Option<LooseValue>,
    /// Rating (preferred over `averageRating`).
    pub rating: Option<LooseValue>,
    /// Rating.
    pub average_rating: Option<LooseValue>,
}

impl RawTraveler {
    /// Resolves aliases into a [`Traveler`]. A zero rating counts as unrated.
    pub fn normalize(self) -> Traveler {
        let name = match first_text(&[&self.first_name]) {
            Some(first) => {
                let last = first_text(&[&self.last_name]).unwrap_or_default();
                Some(format!("{} {}", first, last).trim().to_string())
            }
            None => first_text(&[&self.name]),
        };
        let rating = [&self.rating, &self.average_rating]
            .into_iter()
            .map(number)
            .find(|r| *r != 0.0);

        Traveler {
            id: first_text(&[&self.underscore_id, &self.id]),
            name,
            completed_trips: number(&self.completed_trips),
            cancellations: number(&self.cancellations),
            rating,
        }
    }
}

/// Full assessment request body: `{trip, item, traveler, senderCountry?}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShipmentRequest {
    /// Trip.
    #[serde(default)]
    pub trip: RawTrip,
    /// Item.
    #[serde(default)]
    pub item: RawItem,
    /// Traveller.
    #[serde(default)]
    pub traveler: RawTraveler,
    /// Sender country name or code.
    pub sender_country: Option<String>,
}

impl RawShipmentRequest {
    /// Normalizes every part of the request.
    pub fn normalize(self) -> ShipmentRequest {
        ShipmentRequest {
            trip: self.trip.normalize(),
            item: self.item.normalize(),
            traveler: self.traveler.normalize(),
            sender_country: self
                .sender_country
                .filter(|s| !s.trim().is_empty())
                .map(|s| CountryCode::resolve(&s)),
        }
    }
}

/// Bulk request body: `{trips, item}`, optionally narrowed by route.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTripBatch {
    /// Candidate trips.
    #[serde(default)]
    pub trips: Vec<RawTrip>,
    /// Item to place.
    #[serde(default)]
    pub item: RawItem,
    /// Required origin, if any.
    pub from_country: Option<String>,
    /// Required destination, if any.
    pub to_country: Option<String>,
}

/// Normalized bulk request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripBatch {
    /// Candidate trips.
    pub trips: Vec<Trip>,
    /// Item to place.
    pub item: Item,
    /// Required origin, if any.
    pub from_country: Option<String>,
    /// Required destination, if any.
    pub to_country: Option<String>,
}

impl RawTripBatch {
    /// Normalizes every trip and the item.
    pub fn normalize(self) -> TripBatch {
        TripBatch {
            trips: self.trips.into_iter().map(RawTrip::normalize).collect(),
            item: self.item.normalize(),
            from_country: self.from_country.filter(|s| !s.trim().is_empty()),
            to_country: self.to_country.filter(|s| !s.trim().is_empty()),
        }
    }
}
