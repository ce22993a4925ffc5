use crate::identifiers::CountryCode;

/// Base confiscation risk for categories without a score.
pub const DEFAULT_ITEM_RISK: u32 = 30;

/// Border risk for corridors without a score.
pub const DEFAULT_ROUTE_RISK: u32 = 45;

/// Categories that need padding and careful handling.
pub const FRAGILE_CATEGORIES: &[&str] = &["electronics", "jewelry", "art", "glass", "ceramics"];

/// Base confiscation risk (0-100) by exact item category.
pub static ITEM_RISK_SCORES: &[(&str, u32)] = &[
    ("documents", 5),
    ("books", 5),
    ("clothing", 10),
    ("toys", 15),
    ("household", 15),
    ("sports", 15),
    ("electronics", 35),
    ("personal", 30),
    ("cosmetics", 25),
    ("food_processed", 40),
    ("beverages_non_alcoholic", 30),
    ("jewelry", 60),
    ("watches", 55),
    ("art", 65),
    ("medicine_otc", 50),
    ("food_perishable", 70),
    ("beverages_alcoholic", 55),
    ("medicine_prescription", 85),
    ("antiques", 75),
    ("currency", 80),
    ("valuables_high", 90),
];

/// Border risk (0-100) keyed `ORIGIN-DEST`. Direction matters.
pub static ROUTE_RISK: &[(&str, u32)] = &[
    ("EU-EU", 10),
    ("US-CA", 15),
    ("GB-EU", 25),
    ("EU-US", 35),
    ("US-EU", 35),
    ("EU-GB", 30),
    ("EU-NG", 55),
    ("US-NG", 60),
    ("GB-NG", 50),
    ("EU-GH", 50),
    ("EU-KE", 50),
];

/// Base confiscation risk for an exact category.
pub fn item_risk_score(category: &str) -> u32 {
    ITEM_RISK_SCORES
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_ITEM_RISK)
}

/// Key used in [`ROUTE_RISK`] for a corridor.
pub fn route_key(origin: &CountryCode, destination: &CountryCode) -> String {
    format!("{}-{}", origin, destination)
}

/// Border risk for a corridor key.
pub fn route_risk(key: &str) -> u32 {
    ROUTE_RISK
        .iter()
        .find(|(route, _)| *route == key)
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_ROUTE_RISK)
}
