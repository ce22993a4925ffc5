use crate::restriction::RestrictionNote;

/// Lowercased item descriptors that keyword rules are matched against.
///
/// A missing category reads as `general`; a missing type reads as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTerms {
    category: String,
    kind: String,
}

impl ItemTerms {
    /// Builds terms from an item's optional category and type.
    pub fn new(category: Option<&str>, kind: Option<&str>) -> Self {
        Self {
            category: category
                .map(str::to_lowercase)
                .unwrap_or_else(|| "general".to_string()),
            kind: kind.map(str::to_lowercase).unwrap_or_default(),
        }
    }

    /// Lowercased category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Lowercased type; empty when the item has none.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Substring match of `keyword` against type or category.
    pub fn matches(&self, keyword: &str) -> bool {
        self.kind.contains(keyword) || self.category.contains(keyword)
    }
}

/// A rule entry that is triggered by a keyword fragment.
pub trait KeywordRule {
    /// Fragment matched as a substring.
    fn keyword(&self) -> &str;
}

impl KeywordRule for &str {
    fn keyword(&self) -> &str {
        self
    }
}

impl KeywordRule for RestrictionNote {
    fn keyword(&self) -> &str {
        self.item
    }
}

/// First rule whose keyword matches; used for prohibition lists.
pub fn first_match<'r, R: KeywordRule>(terms: &ItemTerms, rules: &'r [R]) -> Option<&'r R> {
    rules.iter().find(|rule| terms.matches(rule.keyword()))
}

/// Every rule whose keyword matches, in table order; used for restriction lists.
pub fn all_matches<'a, 'r: 'a, R: KeywordRule>(
    terms: &'a ItemTerms,
    rules: &'r [R],
) -> impl Iterator<Item = &'r R> + 'a {
    rules.iter().filter(move |rule| terms.matches(rule.keyword()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::UNIVERSAL_PROHIBITED;

    #[test]
    fn defaults_category_to_general() {
        let terms = ItemTerms::new(None, None);
        assert_eq!(terms.category(), "general");
        assert_eq!(terms.kind(), "");
    }

    #[test]
    fn matches_substrings_case_insensitively() {
        let terms = ItemTerms::new(Some("Electronics"), Some("Used FIREARMS parts"));
        assert!(terms.matches("electronics"));
        assert!(terms.matches("firearms"));
        assert!(!terms.matches("ammunition"));
    }

    #[test]
    fn first_match_stops_at_table_order() {
        let terms = ItemTerms::new(None, Some("weapons and explosives"));
        assert_eq!(first_match(&terms, UNIVERSAL_PROHIBITED), Some(&"explosives"));
    }

    #[test]
    fn all_matches_accumulates() {
        let rules = [
            RestrictionNote::new("alcohol", "a"),
            RestrictionNote::new("tobacco", "b"),
            RestrictionNote::new("perfume", "c"),
        ];
        let terms = ItemTerms::new(Some("alcohol"), Some("tobacco gift set"));
        let notes: Vec<_> = all_matches(&terms, &rules).map(|r| r.note).collect();
        assert_eq!(notes, vec!["a", "b"]);
    }
}
