//! Output formatting utilities.

use baggo_core::{AssessmentResult, CompatibleTrip, QuickCheckRow, RiskClassification};
use baggo_rules::HsCodeEntry;
use serde::Serialize;

/// Formats any record as pretty JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Prints the header for trip tables.
#[allow(clippy::print_literal)]
pub fn print_trip_header() {
    println!(
        "{:<24} {:<8} {:<16} {:<16} {:>8} {}",
        "TRIP_ID", "MODE", "FROM", "TO", "AVAIL_KG", "STATUS"
    );
    println!("{}", "-".repeat(90));
}

/// Formats a compatible trip as a table row.
pub fn format_trip_row(row: &CompatibleTrip) -> String {
    let trip = &row.trip;
    format!(
        "{:<24} {:<8} {:<16} {:<16} {:>8} {}",
        truncate(trip.id.as_deref().unwrap_or("?"), 24),
        truncate(trip.transport_mode.as_str(), 8),
        truncate(trip.origin_country.as_deref().unwrap_or("?"), 16),
        truncate(trip.destination_country.as_deref().unwrap_or("?"), 16),
        trip.available_kg,
        row.compatibility.as_str()
    )
}

/// Prints the header for quick-check tables.
#[allow(clippy::print_literal)]
pub fn print_quick_check_header() {
    println!("{:<24} {:<10} {}", "TRIP_ID", "PASSES", "REASON");
    println!("{}", "-".repeat(60));
}

/// Formats a quick-check result as a table row.
pub fn format_quick_check_row(row: &QuickCheckRow) -> String {
    format!(
        "{:<24} {:<10} {}",
        truncate(row.trip_id.as_deref().unwrap_or("?"), 24),
        if row.check.compatible { "yes" } else { "no" },
        row.check.reason
    )
}

/// Prints the header for HS code tables.
#[allow(clippy::print_literal)]
pub fn print_hs_header() {
    println!("{:<26} {:<12} {:<14} {}", "TAG", "CODE", "CATEGORY", "DESCRIPTION");
    println!("{}", "-".repeat(100));
}

/// Formats an HS entry as a table row.
pub fn format_hs_row(entry: &HsCodeEntry) -> String {
    format!(
        "{:<26} {:<12} {:<14} {}",
        entry.tag,
        entry.code,
        entry.category,
        truncate(entry.description, 46)
    )
}

/// Formats an assessment as an aligned key/value summary.
pub fn format_assessment_summary(result: &AssessmentResult) -> String {
    let mut lines = vec![
        field("Compatibility", result.compatibility.status.as_str()),
        field("Risk", result.risk_classification.overall().as_str()),
        field("Confidence", &result.confidence_score.to_string()),
    ];

    if let RiskClassification::Scored(scores) = &result.risk_classification {
        lines.push(field(
            "Scores",
            &format!(
                "border {} / delay {} / damage {} / confiscation {}",
                scores.border_customs_risk,
                scores.delay_risk,
                scores.damage_risk,
                scores.confiscation_risk
            ),
        ));
    }
    if let Some(customs) = &result.customs {
        lines.push(field(
            "HS code",
            &format!("{} ({})", customs.hs_code, customs.hs_description),
        ));
        lines.push(field(
            "Taxes",
            &format!("{} {}", customs.currency, customs.total_taxes),
        ));
    }
    if let Some(price) = &result.price_estimate {
        lines.push(field(
            "Price",
            &format!("{} {}", price.currency, price.total_price),
        ));
    }
    if let Some(declaration) = &result.declaration_data {
        lines.push(field("Shipment", &declaration.shipment_id));
    }
    for reason in &result.compatibility.reasons {
        lines.push(field("Reason", reason));
    }

    lines.join("\n")
}

fn field(label: &str, value: &str) -> String {
    format!("{:<14} {}", format!("{}:", label), value)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
