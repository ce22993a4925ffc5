use crate::identifiers::TransportMode;
use crate::restriction::{Limits, RestrictionNote};
use serde::Serialize;

/// Largest parcel a mode accepts, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaxDimensions {
    /// Longest side.
    pub length: f64,
    /// Second side.
    pub width: f64,
    /// Third side.
    pub height: f64,
    /// Sum of all sides.
    pub total: f64,
}

/// Carriage rules for one transport mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRules {
    /// Mode label these rules belong to.
    pub mode: &'static str,
    /// Keyword fragments that may never travel by this mode.
    pub prohibited: &'static [&'static str],
    /// Items allowed with conditions.
    pub restricted: &'static [RestrictionNote],
    /// Heaviest accepted item.
    pub max_weight_kg: f64,
    /// Largest accepted parcel.
    pub max_dimensions_cm: MaxDimensions,
}

static AIR: TransportRules = TransportRules {
    mode: "air",
    prohibited: &[
        "lithium_batteries_loose",
        "flammable_liquids",
        "compressed_gases",
        "corrosives",
        "oxidizers",
        "poisons",
        "infectious_substances",
        "fireworks",
        "lighters_bulk",
        "aerosols_large",
        "sharp_objects_unpackaged",
    ],
    restricted: &[
        RestrictionNote::new("lithium_batteries", "Must be in device or carry-on").with_limits(
            Limits {
                max_qty: Some(2),
                max_wh: Some(100.0),
                ..Limits::NONE
            },
        ),
        RestrictionNote::new("liquids", "Must be in clear bag, max 1L total").with_limits(
            Limits {
                max_ml: Some(100.0),
                ..Limits::NONE
            },
        ),
        RestrictionNote::new("alcohol", "Must be in retail packaging").with_limits(Limits {
            max_percent: Some(70.0),
            max_liters: Some(5.0),
            ..Limits::NONE
        }),
        RestrictionNote::new("medicine_liquid", "With prescription or documentation").with_limits(
            Limits {
                max_ml: Some(100.0),
                ..Limits::NONE
            },
        ),
    ],
    max_weight_kg: 23.0,
    max_dimensions_cm: MaxDimensions {
        length: 158.0,
        width: 158.0,
        height: 158.0,
        total: 158.0,
    },
};

static BUS: TransportRules = TransportRules {
    mode: "bus",
    prohibited: &[
        "explosives",
        "large_lithium_batteries",
        "flammable_liquids_large",
        "compressed_gases",
        "weapons",
        "live_animals",
    ],
    restricted: &[
        RestrictionNote::new("alcohol", "Sealed containers only").with_limits(Limits {
            max_liters: Some(10.0),
            ..Limits::NONE
        }),
        RestrictionNote::new("perishables", "Proper cooling required").with_limits(Limits {
            max_hours: Some(12.0),
            ..Limits::NONE
        }),
    ],
    max_weight_kg: 30.0,
    max_dimensions_cm: MaxDimensions {
        length: 80.0,
        width: 60.0,
        height: 40.0,
        total: 180.0,
    },
};

static SHIP: TransportRules = TransportRules {
    mode: "ship",
    prohibited: &["explosives", "radioactive_materials", "infectious_substances"],
    restricted: &[
        RestrictionNote::new("vehicles", "Requires special documentation"),
        RestrictionNote::new("large_electronics", "May require customs declaration"),
    ],
    max_weight_kg: 50.0,
    max_dimensions_cm: MaxDimensions {
        length: 120.0,
        width: 80.0,
        height: 80.0,
        total: 280.0,
    },
};

static TRAIN: TransportRules = TransportRules {
    mode: "train",
    prohibited: &["explosives", "flammable_liquids", "compressed_gases", "weapons"],
    restricted: &[
        RestrictionNote::new("alcohol", "Personal use only").with_limits(Limits {
            max_liters: Some(10.0),
            ..Limits::NONE
        }),
    ],
    max_weight_kg: 32.0,
    max_dimensions_cm: MaxDimensions {
        length: 85.0,
        width: 55.0,
        height: 35.0,
        total: 175.0,
    },
};

static CAR: TransportRules = TransportRules {
    mode: "car",
    prohibited: &["explosives", "illegal_goods"],
    restricted: &[],
    max_weight_kg: 50.0,
    max_dimensions_cm: MaxDimensions {
        length: 150.0,
        width: 100.0,
        height: 80.0,
        total: 330.0,
    },
};

/// Rules for a mode; unknown modes get the air rules.
pub fn transport_rules(mode: &TransportMode) -> &'static TransportRules {
    match mode {
        TransportMode::Air | TransportMode::Other(_) => &AIR,
        TransportMode::Bus => &BUS,
        TransportMode::Ship => &SHIP,
        TransportMode::Train => &TRAIN,
        TransportMode::Car => &CAR,
    }
}

/// Every mode's rules, in declaration order.
pub fn all_transport_rules() -> [&'static TransportRules; 5] {
    [&AIR, &BUS, &SHIP, &TRAIN, &CAR]
}
