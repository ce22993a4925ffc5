use crate::identifiers::CountryCode;
use serde::{Serialize, Serializer};

/// Hard fallback when neither the category nor the default schedule quotes a rate.
pub const FALLBACK_DUTY_RATE: f64 = 0.10;

const DEFAULT_KEY: &str = "DEFAULT";

/// Import duty rate: a fixed fraction or a tariff that depends on the goods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DutyRate {
    /// Fraction of declared value (`0.2` is 20%).
    Fixed(f64),
    /// Rate depends on the exact goods; no single figure applies.
    Varies,
}

impl DutyRate {
    /// Rate used for monetary estimates; `Varies` uses `fallback`.
    pub fn estimate_rate(self, fallback: f64) -> f64 {
        match self {
            DutyRate::Fixed(rate) => rate,
            DutyRate::Varies => fallback,
        }
    }

    /// Display form: a percentage such as `"20%"`, or `"varies"`.
    pub fn label(self) -> String {
        match self {
            DutyRate::Fixed(rate) => format_percent(rate),
            DutyRate::Varies => "varies".to_string(),
        }
    }
}

impl Serialize for DutyRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DutyRate::Fixed(rate) => serializer.serialize_f64(*rate),
            DutyRate::Varies => serializer.serialize_str("varies"),
        }
    }
}

/// Formats a fraction as a percentage string (`0.075` -> `"7.5%"`).
pub fn format_percent(rate: f64) -> String {
    let percent = (rate * 100.0 * 1_000_000.0).round() / 1_000_000.0;
    format!("{}%", percent)
}

/// Duty rates for one item category, keyed by destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutySchedule {
    /// Item category the schedule applies to.
    pub category: &'static str,
    /// `(country, rate)` pairs; a `DEFAULT` entry covers unlisted countries.
    pub rates: &'static [(&'static str, DutyRate)],
}

impl DutySchedule {
    /// Quoted rate for `key`; a `0%` quote counts as no quote.
    fn lookup(&self, key: &str) -> Option<DutyRate> {
        self.rates
            .iter()
            .find(|(country, _)| *country == key)
            .map(|(_, rate)| *rate)
            .filter(|rate| *rate != Fixed(0.0))
    }
}

use self::DutyRate::{Fixed, Varies};

/// Per-category duty schedules.
pub static DUTY_SCHEDULES: &[DutySchedule] = &[
    DutySchedule {
        category: "electronics",
        rates: &[
            ("EU", Fixed(0.0)),
            ("GB", Fixed(0.0)),
            ("US", Fixed(0.0)),
            ("NG", Fixed(0.20)),
            ("GH", Fixed(0.20)),
            ("KE", Fixed(0.25)),
            ("DEFAULT", Fixed(0.10)),
        ],
    },
    DutySchedule {
        category: "clothing",
        rates: &[
            ("EU", Fixed(0.12)),
            ("GB", Fixed(0.12)),
            ("US", Fixed(0.12)),
            ("NG", Fixed(0.35)),
            ("GH", Fixed(0.20)),
            ("KE", Fixed(0.25)),
            ("DEFAULT", Fixed(0.15)),
        ],
    },
    DutySchedule {
        category: "food",
        rates: &[
            ("EU", Varies),
            ("GB", Varies),
            ("US", Varies),
            ("NG", Fixed(0.20)),
            ("GH", Fixed(0.20)),
            ("KE", Fixed(0.25)),
            ("DEFAULT", Fixed(0.15)),
        ],
    },
    DutySchedule {
        category: "jewelry",
        rates: &[
            ("EU", Fixed(0.025)),
            ("GB", Fixed(0.025)),
            ("US", Fixed(0.065)),
            ("NG", Fixed(0.20)),
            ("GH", Fixed(0.20)),
            ("KE", Fixed(0.25)),
            ("DEFAULT", Fixed(0.10)),
        ],
    },
    DutySchedule {
        category: "medicine",
        rates: &[
            ("EU", Fixed(0.0)),
            ("GB", Fixed(0.0)),
            ("US", Fixed(0.0)),
            ("NG", Fixed(0.05)),
            ("GH", Fixed(0.10)),
            ("KE", Fixed(0.10)),
            ("DEFAULT", Fixed(0.05)),
        ],
    },
    DutySchedule {
        category: "documents",
        rates: &[
            ("EU", Fixed(0.0)),
            ("GB", Fixed(0.0)),
            ("US", Fixed(0.0)),
            ("NG", Fixed(0.0)),
            ("GH", Fixed(0.0)),
            ("KE", Fixed(0.0)),
            ("DEFAULT", Fixed(0.0)),
        ],
    },
    DutySchedule {
        category: "toys",
        rates: &[
            ("EU", Fixed(0.0)),
            ("GB", Fixed(0.0)),
            ("US", Fixed(0.0)),
            ("NG", Fixed(0.20)),
            ("GH", Fixed(0.20)),
            ("KE", Fixed(0.25)),
            ("DEFAULT", Fixed(0.10)),
        ],
    },
];

/// Schedule for categories without their own entry.
pub static DEFAULT_DUTY_SCHEDULE: DutySchedule = DutySchedule {
    category: "DEFAULT",
    rates: &[
        ("EU", Fixed(0.05)),
        ("GB", Fixed(0.05)),
        ("US", Fixed(0.05)),
        ("NG", Fixed(0.20)),
        ("GH", Fixed(0.20)),
        ("KE", Fixed(0.25)),
        ("DEFAULT", Fixed(0.10)),
    ],
};

/// Schedule for an item category, falling back to [`DEFAULT_DUTY_SCHEDULE`].
pub fn duty_schedule(category: &str) -> &'static DutySchedule {
    DUTY_SCHEDULES
        .iter()
        .find(|schedule| schedule.category == category)
        .unwrap_or(&DEFAULT_DUTY_SCHEDULE)
}

/// Resolves the duty rate for a category shipped to `country`.
///
/// Lookup order: the schedule's country entry, the schedule's `DEFAULT`
/// entry, then [`FALLBACK_DUTY_RATE`]. A `0%` entry is skipped like a
/// missing one, so zero-rated goods are still estimated at the fallback.
pub fn duty_rate(category: &str, country: &CountryCode) -> DutyRate {
    let schedule = duty_schedule(category);
    schedule
        .lookup(country.as_str())
        .or_else(|| schedule.lookup(DEFAULT_KEY))
        .unwrap_or(Fixed(FALLBACK_DUTY_RATE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::DutyRate::{Fixed, Varies};

    #[test]
    fn looks_up_country_then_schedule_default() {
        assert_eq!(
            duty_rate("electronics", &CountryCode::new("NG")),
            Fixed(0.20)
        );
        assert_eq!(
            duty_rate("electronics", &CountryCode::new("FR")),
            Fixed(0.10)
        );
        assert_eq!(duty_rate("food", &CountryCode::new("GB")), Varies);
    }

    #[test]
    fn zero_rate_falls_through_to_defaults() {
        assert_eq!(
            duty_rate("electronics", &CountryCode::new("GB")),
            Fixed(0.10)
        );
        assert_eq!(
            duty_rate("electronics", &CountryCode::new("EU")),
            Fixed(0.10)
        );
        assert_eq!(
            duty_rate("documents", &CountryCode::new("US")),
            Fixed(FALLBACK_DUTY_RATE)
        );
        assert_eq!(
            duty_rate("documents", &CountryCode::fallback()),
            Fixed(FALLBACK_DUTY_RATE)
        );
        assert_eq!(duty_rate("jewelry", &CountryCode::new("GB")), Fixed(0.025));
    }

    #[test]
    fn unknown_category_uses_default_schedule() {
        assert_eq!(duty_rate("furniture", &CountryCode::new("KE")), Fixed(0.25));
        assert_eq!(
            duty_rate("furniture", &CountryCode::fallback()),
            Fixed(0.10)
        );
    }

    #[test]
    fn labels_and_estimates() {
        assert_eq!(Fixed(0.075).label(), "7.5%");
        assert_eq!(Fixed(0.19).label(), "19%");
        assert_eq!(Fixed(0.0).label(), "0%");
        assert_eq!(Varies.label(), "varies");
        assert_eq!(Varies.estimate_rate(0.10), 0.10);
        assert_eq!(Fixed(0.2).estimate_rate(0.10), 0.2);
    }
}
