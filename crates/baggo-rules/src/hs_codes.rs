use serde::Serialize;

/// Harmonized System classification for an internal category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HsCodeEntry {
    /// Internal category tag (e.g. `electronics_phones`).
    pub tag: &'static str,
    /// HS code or code range.
    pub code: &'static str,
    /// Customs description.
    pub description: &'static str,
    /// Broad goods category.
    pub category: &'static str,
}

const fn entry(
    tag: &'static str,
    code: &'static str,
    description: &'static str,
    category: &'static str,
) -> HsCodeEntry {
    HsCodeEntry {
        tag,
        code,
        description,
        category,
    }
}

/// Classification used when an item's category has no entry of its own.
pub static HOUSEHOLD_ITEMS: HsCodeEntry =
    entry("household_items", "9403-9406", "Household items", "household");

static HS_CODES: &[HsCodeEntry] = &[
    entry("food_perishable", "0201-0210", "Meat and edible meat offal", "food"),
    entry("food_dairy", "0401-0406", "Dairy produce", "food"),
    entry("food_vegetables", "0701-0714", "Vegetables", "food"),
    entry("food_fruits", "0801-0814", "Fruits and nuts", "food"),
    entry("food_processed", "1601-1605", "Processed food", "food"),
    entry("beverages_non_alcoholic", "2201-2202", "Non-alcoholic beverages", "beverages"),
    entry("beverages_alcoholic", "2203-2208", "Alcoholic beverages", "beverages"),
    entry("electronics_phones", "8517", "Telephones and smartphones", "electronics"),
    entry("electronics_computers", "8471", "Computers and laptops", "electronics"),
    entry("electronics_tablets", "8471.30", "Tablets and portable devices", "electronics"),
    entry("electronics_accessories", "8518", "Electronic accessories", "electronics"),
    entry("electronics_cameras", "9006", "Cameras and photography equipment", "electronics"),
    entry("clothing_general", "6101-6117", "Clothing articles", "clothing"),
    entry("clothing_footwear", "6401-6405", "Footwear", "clothing"),
    entry("textiles_fabric", "5208-5212", "Woven fabrics", "textiles"),
    entry("personal_cosmetics", "3303-3307", "Cosmetics and toiletries", "personal"),
    entry("personal_jewelry", "7113-7118", "Jewelry and precious items", "personal"),
    entry("personal_watches", "9101-9102", "Watches", "personal"),
    entry("documents_general", "4901", "Printed documents and books", "documents"),
    entry("documents_legal", "4907", "Legal documents and certificates", "documents"),
    entry("medicine_otc", "3004", "Over-the-counter medicines", "medicine"),
    entry("medicine_prescription", "3003", "Prescription medicines", "medicine"),
    entry("health_equipment", "9018", "Medical equipment", "health"),
    entry("toys_games", "9503-9505", "Toys and games", "toys"),
    entry("sports_equipment", "9506", "Sports equipment", "sports"),
    entry("art_antiques", "9701-9706", "Art and antiques", "art"),
];

/// All classifications, household items last.
pub fn hs_codes() -> impl Iterator<Item = &'static HsCodeEntry> {
    HS_CODES.iter().chain(std::iter::once(&HOUSEHOLD_ITEMS))
}

/// Classification for an exact category tag, or [`HOUSEHOLD_ITEMS`].
pub fn hs_code(tag: &str) -> &'static HsCodeEntry {
    HS_CODES
        .iter()
        .find(|entry| entry.tag == tag)
        .unwrap_or(&HOUSEHOLD_ITEMS)
}
