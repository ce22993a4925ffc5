use crate::duty::DutyRate;
use serde::Serialize;

/// Quantity caps attached to a restriction entry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    /// Maximum number of units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_qty: Option<u32>,
    /// Maximum battery capacity in watt-hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wh: Option<f64>,
    /// Maximum volume per container in millilitres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ml: Option<f64>,
    /// Maximum alcohol by volume, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_percent: Option<f64>,
    /// Maximum total volume in litres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_liters: Option<f64>,
    /// Maximum time in transit, in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hours: Option<f64>,
}

impl Limits {
    /// No caps at all.
    pub const NONE: Limits = Limits {
        max_qty: None,
        max_wh: None,
        max_ml: None,
        max_percent: None,
        max_liters: None,
        max_hours: None,
    };
}

/// Personal allowance printed on a country restriction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Allowance {
    /// Free-text allowance such as `"200 cigarettes"`.
    Text(&'static str),
    /// Monetary allowance in the entry's currency.
    Amount(f64),
}

/// A keyword that triggers a soft restriction, with the note shown to users.
///
/// Matching is substring-based against the item's category and type; the
/// numeric fields are informational and are not enforced by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionNote {
    /// Keyword fragment matched against the item.
    pub item: &'static str,
    /// Human-readable guidance.
    pub note: &'static str,
    /// Optional quantity caps.
    #[serde(flatten)]
    pub limits: Limits,
    /// Optional personal allowance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Allowance>,
    /// Optional duty rate quoted alongside the restriction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty: Option<DutyRate>,
    /// Currency of a monetary allowance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'static str>,
}

impl RestrictionNote {
    /// Creates an entry with only a keyword and a note.
    pub const fn new(item: &'static str, note: &'static str) -> Self {
        Self {
            item,
            note,
            limits: Limits::NONE,
            limit: None,
            duty: None,
            currency: None,
        }
    }

    /// Attaches quantity caps.
    pub const fn with_limits(self, limits: Limits) -> Self {
        Self { limits, ..self }
    }

    /// Attaches a free-text allowance.
    pub const fn with_allowance(self, text: &'static str) -> Self {
        Self {
            limit: Some(Allowance::Text(text)),
            ..self
        }
    }

    /// Attaches a monetary allowance in the given currency.
    pub const fn with_cash_limit(self, amount: f64, currency: &'static str) -> Self {
        Self {
            limit: Some(Allowance::Amount(amount)),
            currency: Some(currency),
            ..self
        }
    }

    /// Attaches a quoted duty rate.
    pub const fn with_duty(self, duty: DutyRate) -> Self {
        Self {
            duty: Some(duty),
            ..self
        }
    }
}
