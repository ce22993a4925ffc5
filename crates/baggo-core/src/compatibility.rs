use crate::shared::{Item, Trip};
use baggo_rules::{
    all_matches, country_rules, first_match, transport_rules, CountryCode, TransportMode,
    UNIVERSAL_PROHIBITED,
};
use serde::Serialize;
use tracing::debug;

/// Whether an item may travel on a trip.
///
/// Variants are ordered by severity; a check can raise the status but
/// never lower it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CompatibilityStatus {
    /// No rule objects.
    #[default]
    Yes,
    /// Allowed subject to conditions listed in the reasons.
    Conditional,
    /// Not allowed.
    No,
}

impl CompatibilityStatus {
    /// Display form (`Yes`, `Conditional`, `No`).
    pub fn as_str(self) -> &'static str {
        match self {
            CompatibilityStatus::Yes => "Yes",
            CompatibilityStatus::Conditional => "Conditional",
            CompatibilityStatus::No => "No",
        }
    }
}

/// Verdict of a compatibility check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    /// Final status.
    pub status: CompatibilityStatus,
    /// Every rule that fired, in check order.
    pub reasons: Vec<String>,
    /// Mode the trip was checked against.
    pub transport_mode: TransportMode,
    /// Resolved destination key.
    pub destination_country: CountryCode,
}

#[derive(Default)]
struct Verdict {
    status: CompatibilityStatus,
    reasons: Vec<String>,
}

impl Verdict {
    fn raise(&mut self, status: CompatibilityStatus, reason: String) {
        self.status = self.status.max(status);
        self.reasons.push(reason);
    }
}

/// Decides whether `item` may travel on `trip`, and why.
///
/// All checks run and every reason is kept. Prohibitions and the mode's
/// weight cap make the verdict `No`; capacity, size and destination
/// restrictions only downgrade `Yes` to `Conditional`. Restrictions are
/// not reported once the verdict is `No`.
pub fn check_compatibility(trip: &Trip, item: &Item) -> Compatibility {
    let mode = &trip.transport_mode;
    let rules = transport_rules(mode);
    let terms = item.terms();
    let mut verdict = Verdict::default();

    if first_match(&terms, UNIVERSAL_PROHIBITED).is_some() {
        verdict.raise(
            CompatibilityStatus::No,
            format!("Item type \"{}\" is universally prohibited", terms.kind()),
        );
    }

    if let Some(keyword) = first_match(&terms, rules.prohibited) {
        verdict.raise(
            CompatibilityStatus::No,
            format!("Item not allowed on {} transport: {}", mode, keyword),
        );
    }

    if item.weight > rules.max_weight_kg {
        verdict.raise(
            CompatibilityStatus::No,
            format!(
                "Weight {}kg exceeds {} limit of {}kg",
                item.weight, mode, rules.max_weight_kg
            ),
        );
    }

    if item.weight > trip.available_kg {
        verdict.raise(
            CompatibilityStatus::Conditional,
            format!(
                "Item weight {}kg exceeds trip's available capacity of {}kg",
                item.weight, trip.available_kg
            ),
        );
    }

    if let Some(dims) = &item.dimensions {
        let max = &rules.max_dimensions_cm;
        if dims.length > max.length || dims.width > max.width || dims.height > max.height {
            verdict.raise(
                CompatibilityStatus::Conditional,
                format!("Dimensions exceed {} limits", mode),
            );
        }
    }

    let destination = trip.destination_code();
    let country = country_rules(&destination);

    if let Some(keyword) = first_match(&terms, country.prohibited) {
        verdict.raise(
            CompatibilityStatus::No,
            format!("Item prohibited in destination country: {}", keyword),
        );
    }

    if verdict.status != CompatibilityStatus::No {
        for restriction in all_matches(&terms, country.restricted) {
            let note = if restriction.note.is_empty() {
                "Additional documentation may be required"
            } else {
                restriction.note
            };
            verdict.raise(
                CompatibilityStatus::Conditional,
                format!("Item has restrictions: {}", note),
            );
        }
    }

    let status = verdict.status;
    let mut reasons = verdict.reasons;
    if reasons.is_empty() {
        reasons.push("Item is compatible with trip".to_string());
    }

    debug!(
        mode = %mode,
        destination = %destination,
        status = status.as_str(),
        reasons = reasons.len(),
        "compatibility checked"
    );

    Compatibility {
        status,
        reasons,
        transport_mode: mode.clone(),
        destination_country: destination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Dimensions;

    fn trip(mode: TransportMode, destination: &str, available_kg: f64) -> Trip {
        Trip {
            transport_mode: mode,
            destination_country: Some(destination.to_string()),
            available_kg,
            ..Default::default()
        }
    }

    fn item(category: &str, kind: &str, weight: f64) -> Item {
        Item {
            category: Some(category.to_string()),
            kind: Some(kind.to_string()),
            weight,
            ..Default::default()
        }
    }

    #[test]
    fn plain_item_is_compatible() {
        let result = check_compatibility(
            &trip(TransportMode::Air, "France", 10.0),
            &item("documents", "contract", 0.5),
        );
        assert_eq!(result.status, CompatibilityStatus::Yes);
        assert_eq!(result.reasons, vec!["Item is compatible with trip"]);
        assert_eq!(result.destination_country.as_str(), "FR");
    }

    #[test]
    fn universal_prohibition_reports_once() {
        let result = check_compatibility(
            &trip(TransportMode::Air, "GB", 10.0),
            &item("general", "firearms and explosives", 1.0),
        );
        assert_eq!(result.status, CompatibilityStatus::No);
        let universal: Vec<_> = result
            .reasons
            .iter()
            .filter(|r| r.contains("universally prohibited"))
            .collect();
        assert_eq!(universal.len(), 1);
        assert!(universal[0].contains("\"firearms and explosives\""));
    }

    #[test]
    fn mode_weight_cap_is_terminal() {
        let result = check_compatibility(
            &trip(TransportMode::Bus, "GB", 50.0),
            &item("clothing", "shirts", 40.0),
        );
        assert_eq!(result.status, CompatibilityStatus::No);
        assert!(result
            .reasons
            .contains(&"Weight 40kg exceeds bus limit of 30kg".to_string()));
    }

    #[test]
    fn capacity_shortfall_does_not_undo_no() {
        let result = check_compatibility(
            &trip(TransportMode::Bus, "GB", 5.0),
            &item("clothing", "shirts", 40.0),
        );
        assert_eq!(result.status, CompatibilityStatus::No);
        assert_eq!(result.reasons.len(), 2);
        assert!(result.reasons[1].contains("available capacity of 5kg"));
    }

    #[test]
    fn oversize_parcel_is_conditional() {
        let mut parcel = item("clothing", "shirts", 2.0);
        parcel.dimensions = Some(Dimensions {
            length: 200.0,
            width: 10.0,
            height: 10.0,
        });
        let result = check_compatibility(&trip(TransportMode::Train, "GB", 10.0), &parcel);
        assert_eq!(result.status, CompatibilityStatus::Conditional);
        assert_eq!(result.reasons, vec!["Dimensions exceed train limits"]);
    }

    #[test]
    fn unknown_mode_uses_air_limits() {
        let result = check_compatibility(
            &trip(TransportMode::Other("hovercraft".into()), "GB", 30.0),
            &item("clothing", "shirts", 25.0),
        );
        assert_eq!(result.status, CompatibilityStatus::No);
        assert!(result.reasons[0].contains("hovercraft limit of 23kg"));
    }

    #[test]
    fn status_order_is_by_severity() {
        assert!(CompatibilityStatus::Yes < CompatibilityStatus::Conditional);
        assert!(CompatibilityStatus::Conditional < CompatibilityStatus::No);
        assert_eq!(
            serde_json::to_value(CompatibilityStatus::Conditional).unwrap(),
            serde_json::json!("Conditional")
        );
    }
}
