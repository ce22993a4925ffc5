use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Country names and abbreviations accepted by [`CountryCode::resolve`].
///
/// Order matters: partial matches walk this table front to back.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("united kingdom", "GB"),
    ("uk", "GB"),
    ("britain", "GB"),
    ("england", "GB"),
    ("united states", "US"),
    ("usa", "US"),
    ("america", "US"),
    ("nigeria", "NG"),
    ("ghana", "GH"),
    ("kenya", "KE"),
    ("south africa", "ZA"),
    ("france", "FR"),
    ("germany", "DE"),
    ("canada", "CA"),
    ("spain", "EU"),
    ("italy", "EU"),
    ("netherlands", "EU"),
    ("belgium", "EU"),
    ("portugal", "EU"),
    ("austria", "EU"),
    ("ireland", "EU"),
    ("poland", "EU"),
];

const DEFAULT_CODE: &str = "DEFAULT";

/// Internal country key: a two-letter code or `DEFAULT`.
///
/// `EU` is treated as a country here; it carries the common EU customs rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a new instance without validation; callers are responsible for conformity.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The catch-all key used for unmapped countries.
    pub fn fallback() -> Self {
        Self(DEFAULT_CODE.to_string())
    }

    /// Parses a strict country key (`[A-Z]{2}` or `DEFAULT`).
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let re = Regex::new(r"^(?:[A-Z]{2}|DEFAULT)$").expect("invalid regex");
        if !re.is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "CountryCode",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Best-effort mapping from a free-text country name to an internal key.
    ///
    /// Empty input is `DEFAULT`. Otherwise tries an exact alias, then treats
    /// any two-character input as a code, then accepts the first alias that
    /// contains or is contained by the input, and finally gives up with
    /// `DEFAULT`. Whitespace-only input trims to nothing, which every alias
    /// contains, so it lands on the first alias (`GB`).
    pub fn resolve(name: &str) -> Self {
        if name.is_empty() {
            return Self::fallback();
        }
        let normalized = name.trim().to_lowercase();

        if let Some((_, code)) = COUNTRY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
        {
            return Self::new(*code);
        }

        if normalized.chars().count() == 2 {
            return Self(normalized.to_uppercase());
        }

        COUNTRY_ALIASES
            .iter()
            .find(|(alias, _)| normalized.contains(alias) || alias.contains(normalized.as_str()))
            .map(|(_, code)| Self::new(*code))
            .unwrap_or_else(Self::fallback)
    }

    /// Like [`CountryCode::resolve`], with absent input mapping to `DEFAULT`.
    pub fn resolve_opt(name: Option<&str>) -> Self {
        name.map(Self::resolve).unwrap_or_else(Self::fallback)
    }

    /// Returns true for the catch-all key.
    pub fn is_fallback(&self) -> bool {
        self.0 == DEFAULT_CODE
    }

    /// Borrows the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Means of travel a trip uses.
///
/// Unknown labels are kept verbatim in [`TransportMode::Other`] so they can be
/// echoed back; rule lookups treat them like air travel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TransportMode {
    /// Commercial flight.
    #[default]
    Air,
    /// Coach or intercity bus.
    Bus,
    /// Ferry or cargo vessel.
    Ship,
    /// Rail.
    Train,
    /// Private car.
    Car,
    /// Any other label supplied by the caller.
    Other(String),
}

impl TransportMode {
    /// Maps a label to a mode; labels are case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            "air" => TransportMode::Air,
            "bus" => TransportMode::Bus,
            "ship" => TransportMode::Ship,
            "train" => TransportMode::Train,
            "car" => TransportMode::Car,
            other => TransportMode::Other(other.to_string()),
        }
    }

    /// Parses a label, rejecting anything outside the five known modes.
    pub fn parse(label: &str) -> Result<Self, ValidationError> {
        match Self::from_label(label) {
            TransportMode::Other(value) => Err(ValidationError::UnknownTransportMode(value)),
            mode => Ok(mode),
        }
    }

    /// The label this mode was built from.
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Air => "air",
            TransportMode::Bus => "bus",
            TransportMode::Ship => "ship",
            TransportMode::Train => "train",
            TransportMode::Car => "car",
            TransportMode::Other(label) => label,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransportMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_exact_aliases() {
        assert_eq!(CountryCode::resolve("United Kingdom").as_str(), "GB");
        assert_eq!(CountryCode::resolve("  nigeria ").as_str(), "NG");
        assert_eq!(CountryCode::resolve("Spain").as_str(), "EU");
    }

    #[test]
    fn two_letter_input_passes_through_uppercased() {
        assert_eq!(CountryCode::resolve("fr").as_str(), "FR");
        assert_eq!(CountryCode::resolve("xx").as_str(), "XX");
    }

    #[test]
    fn partial_matches_follow_alias_order() {
        assert_eq!(CountryCode::resolve("Republic of Ghana").as_str(), "GH");
        assert_eq!(CountryCode::resolve("Northern Ireland").as_str(), "EU");
        assert_eq!(CountryCode::resolve("united").as_str(), "GB");
    }

    #[test]
    fn unknown_and_empty_fall_back() {
        assert!(CountryCode::resolve("Atlantis").is_fallback());
        assert!(CountryCode::resolve("").is_fallback());
        assert!(CountryCode::resolve("DEFAULT").is_fallback());
        assert!(CountryCode::resolve_opt(None).is_fallback());
    }

    #[test]
    fn whitespace_only_input_hits_first_alias() {
        assert_eq!(CountryCode::resolve("   ").as_str(), "GB");
        assert_eq!(CountryCode::resolve_opt(Some("\t")).as_str(), "GB");
    }

    #[test]
    fn strict_parse_rejects_names() {
        assert!(CountryCode::parse("GB").is_ok());
        assert!(CountryCode::parse("DEFAULT").is_ok());
        assert!(CountryCode::parse("gb").is_err());
        assert!(CountryCode::parse("Germany").is_err());
    }

    #[test]
    fn transport_labels_are_case_sensitive() {
        assert_eq!(TransportMode::from_label("ship"), TransportMode::Ship);
        assert_eq!(
            TransportMode::from_label("Air"),
            TransportMode::Other("Air".into())
        );
        assert!(matches!(
            TransportMode::parse("plane"),
            Err(ValidationError::UnknownTransportMode(label)) if label == "plane"
        ));
        assert_eq!(TransportMode::Other("plane".into()).as_str(), "plane");
    }
}
