//! Bulk trip filtering for search and matching screens.

use crate::compatibility::{check_compatibility, CompatibilityStatus};
use crate::shared::{Item, Trip};
use baggo_rules::{CountryCode, ItemTerms, UNIVERSAL_PROHIBITED};
use serde::Serialize;
use tracing::debug;

/// A trip that can take the item, annotated with the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibleTrip {
    /// The trip as supplied.
    #[serde(flatten)]
    pub trip: Trip,
    /// `Yes` or `Conditional`.
    pub compatibility: CompatibilityStatus,
    /// Reasons from the full check.
    pub compatibility_reasons: Vec<String>,
}

/// Keeps the trips whose full compatibility check is not `No`, in input order.
pub fn filter_compatible_trips(trips: &[Trip], item: &Item) -> Vec<CompatibleTrip> {
    let kept: Vec<_> = trips
        .iter()
        .filter_map(|trip| {
            let result = check_compatibility(trip, item);
            (result.status != CompatibilityStatus::No).then(|| CompatibleTrip {
                trip: trip.clone(),
                compatibility: result.status,
                compatibility_reasons: result.reasons,
            })
        })
        .collect();
    debug!(candidates = trips.len(), kept = kept.len(), "trips filtered");
    kept
}

/// Outcome of the cheap pre-filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickCheck {
    /// Whether the trip survives the pre-filter.
    pub compatible: bool,
    /// `Weight exceeds capacity`, `Prohibited item` or `Compatible`.
    pub reason: String,
}

impl QuickCheck {
    fn new(compatible: bool, reason: &str) -> Self {
        Self {
            compatible,
            reason: reason.to_string(),
        }
    }
}

/// Capacity and universal-prohibition check on the item type only.
pub fn quick_compatibility_check(trip: &Trip, item: &Item) -> QuickCheck {
    if item.weight > trip.available_kg {
        return QuickCheck::new(false, "Weight exceeds capacity");
    }
    let kind = ItemTerms::new(None, item.kind.as_deref());
    if UNIVERSAL_PROHIBITED.iter().any(|keyword| kind.kind().contains(keyword)) {
        return QuickCheck::new(false, "Prohibited item");
    }
    QuickCheck::new(true, "Compatible")
}

/// Quick check result for one trip of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickCheckRow {
    /// Trip identifier, if supplied.
    pub trip_id: Option<String>,
    /// Check outcome.
    #[serde(flatten)]
    pub check: QuickCheck,
}

/// Runs the quick check over a batch, keeping every row.
pub fn quick_check_trips(trips: &[Trip], item: &Item) -> Vec<QuickCheckRow> {
    trips
        .iter()
        .map(|trip| QuickCheckRow {
            trip_id: trip.id.clone(),
            check: quick_compatibility_check(trip, item),
        })
        .collect()
}

/// Trait for selecting trips during bulk search.
pub trait TripFilter {
    /// Returns true if the trip matches the filter criteria.
    fn matches(&self, trip: &Trip) -> bool;
}

/// Filter by corridor. Unset ends match any trip.
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    /// Required origin.
    pub from_country: Option<CountryCode>,
    /// Required destination.
    pub to_country: Option<CountryCode>,
}

impl RouteFilter {
    /// Builds a filter from free-text country names.
    pub fn new(from_country: Option<&str>, to_country: Option<&str>) -> Self {
        Self {
            from_country: from_country.map(CountryCode::resolve),
            to_country: to_country.map(CountryCode::resolve),
        }
    }
}

impl TripFilter for RouteFilter {
    fn matches(&self, trip: &Trip) -> bool {
        let origin_ok = self.from_country.as_ref().map_or(true, |wanted| {
            CountryCode::resolve_opt(trip.origin_country.as_deref()) == *wanted
        });
        let destination_ok = self
            .to_country
            .as_ref()
            .map_or(true, |wanted| trip.destination_code() == *wanted);
        origin_ok && destination_ok
    }
}

/// Filter by the quick pre-check for one item.
#[derive(Debug, Clone)]
pub struct QuickCheckFilter {
    /// Item being placed.
    pub item: Item,
}

impl TripFilter for QuickCheckFilter {
    fn matches(&self, trip: &Trip) -> bool {
        quick_compatibility_check(trip, &self.item).compatible
    }
}

/// Composite filter: all filters must match (AND).
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<Box<dyn TripFilter>>,
}

impl TripFilter for AndFilter {
    fn matches(&self, trip: &Trip) -> bool {
        self.filters.iter().all(|f| f.matches(trip))
    }
}

/// Finds trips on a corridor that can take `item`.
///
/// Trips are narrowed by route and the quick check before the full
/// compatibility check runs on the survivors.
pub fn search_compatible_trips(
    trips: &[Trip],
    item: &Item,
    from_country: Option<&str>,
    to_country: Option<&str>,
) -> Vec<CompatibleTrip> {
    let route: Box<dyn TripFilter> = Box::new(RouteFilter::new(from_country, to_country));
    let quick: Box<dyn TripFilter> = Box::new(QuickCheckFilter { item: item.clone() });
    let filter = AndFilter {
        filters: vec![route, quick],
    };
    let candidates: Vec<Trip> = trips.iter().filter(|t| filter.matches(t)).cloned().collect();
    filter_compatible_trips(&candidates, item)
}
