use crate::customs::CustomsInfo;
use crate::risk::is_fragile;
use crate::shared::{Item, Trip};
use baggo_rules::TransportMode;
use serde::Serialize;

/// Checklists a sender and traveller should follow.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Requirements {
    /// How to pack.
    pub packaging: Vec<String>,
    /// What to put on the label.
    pub labeling: Vec<String>,
    /// What to declare at the border.
    pub declaration: Vec<String>,
    /// How to handle in transit.
    pub handling: Vec<String>,
}

fn lines<const N: usize>(items: [&str; N]) -> impl Iterator<Item = String> + '_ {
    items.into_iter().map(String::from)
}

/// Builds packaging, labelling, declaration and handling checklists.
pub fn generate_requirements(trip: &Trip, item: &Item, customs: &CustomsInfo) -> Requirements {
    let mut req = Requirements::default();

    if is_fragile(item.terms().category()) {
        req.packaging.extend(lines([
            "Use bubble wrap or foam padding",
            "Mark package as FRAGILE",
            "Use double-walled corrugated box",
        ]));
        req.handling.push("Handle with care - fragile contents".into());
    }

    match trip.transport_mode {
        TransportMode::Air => {
            req.packaging.extend(lines([
                "Ensure package can withstand pressure changes",
                "Seal all liquids in leak-proof containers",
            ]));
            req.labeling.push("Include sender and receiver contact details".into());
        }
        TransportMode::Ship => {
            req.packaging.extend(lines([
                "Use waterproof outer packaging",
                "Include moisture-absorbing packets",
            ]));
            req.handling.push("Protect from humidity and salt air".into());
        }
        _ => {}
    }

    req.labeling.push("Clearly mark contents description".into());
    req.labeling.push(format!("Include HS Code: {}", customs.hs_code));
    req.labeling.push(format!(
        "Declared value: {} {}",
        customs.currency, customs.declared_value
    ));

    if customs.exceeds_duty_free {
        req.declaration.extend(lines([
            "Complete customs declaration form",
            "Include commercial invoice",
            "Prepare for potential duty payment",
        ]));
    }
    req.declaration.extend(lines([
        "Provide accurate item description",
        "Declare true value of goods",
    ]));
    req.declaration.extend(
        customs
            .required_documents
            .iter()
            .map(|doc| format!("Required: {}", doc.replace('_', " "))),
    );

    req
}
