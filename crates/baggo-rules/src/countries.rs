use crate::duty::DutyRate;
use crate::identifiers::{CountryCode, TransportMode};
use crate::restriction::RestrictionNote;
use serde::Serialize;

/// Items no traveller may carry on any corridor.
pub const UNIVERSAL_PROHIBITED: &[&str] = &[
    "explosives",
    "firearms",
    "ammunition",
    "narcotics",
    "controlled_substances",
    "radioactive_materials",
    "hazardous_chemicals",
    "counterfeit_goods",
    "endangered_species",
    "human_remains",
    "illegal_wildlife_products",
    "child_exploitation_material",
    "weapons",
    "tear_gas",
    "pepper_spray",
];

/// Customs clearance time by mode, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessingDays {
    /// Air freight / passenger baggage.
    pub air: u32,
    /// Sea freight.
    pub ship: u32,
    /// Road crossings by bus.
    pub bus: u32,
}

impl ProcessingDays {
    /// Days for a mode, if the country publishes a figure for it.
    pub fn for_mode(&self, mode: &TransportMode) -> Option<u32> {
        match mode {
            TransportMode::Air => Some(self.air),
            TransportMode::Ship => Some(self.ship),
            TransportMode::Bus => Some(self.bus),
            _ => None,
        }
    }
}

/// Import rules for a destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRules {
    /// Internal country key.
    pub code: &'static str,
    /// Declared value at or below which no duty or VAT is due, in `currency`.
    pub duty_free_threshold: f64,
    /// Import VAT as a fraction.
    pub vat_rate: f64,
    /// Local currency code.
    pub currency: &'static str,
    /// Keyword fragments that may not be imported.
    pub prohibited: &'static [&'static str],
    /// Items allowed with conditions.
    pub restricted: &'static [RestrictionNote],
    /// Paperwork customs expects.
    pub documentation: &'static [&'static str],
    /// Clearance time by mode.
    pub processing_days: ProcessingDays,
}

/// Rules for every destination without its own entry.
pub static DEFAULT_COUNTRY_RULES: CountryRules = CountryRules {
    code: "DEFAULT",
    duty_free_threshold: 100.0,
    vat_rate: 0.15,
    currency: "USD",
    prohibited: UNIVERSAL_PROHIBITED,
    restricted: &[],
    documentation: &["customs_declaration", "commercial_invoice"],
    processing_days: ProcessingDays {
        air: 2,
        ship: 5,
        bus: 2,
    },
};

static COUNTRY_RULES: &[CountryRules] = &[
    CountryRules {
        code: "EU",
        duty_free_threshold: 150.0,
        vat_rate: 0.20,
        currency: "EUR",
        prohibited: &[
            "meat_unprocessed",
            "dairy_unlicensed",
            "plants_soil",
            "counterfeit_goods",
            "pirated_materials",
        ],
        restricted: &[
            RestrictionNote::new("alcohol", "Personal use")
                .with_duty(DutyRate::Fixed(0.0))
                .with_allowance("1L spirits or 2L wine"),
            RestrictionNote::new("tobacco", "Personal use")
                .with_duty(DutyRate::Fixed(0.0))
                .with_allowance("200 cigarettes"),
            RestrictionNote::new("medicine", "Max 3 month supply with prescription"),
            RestrictionNote::new("currency", "Must declare if exceeding")
                .with_cash_limit(10_000.0, "EUR"),
        ],
        documentation: &["commercial_invoice", "packing_list", "origin_certificate"],
        processing_days: ProcessingDays {
            air: 1,
            ship: 3,
            bus: 1,
        },
    },
    CountryRules {
        code: "GB",
        duty_free_threshold: 135.0,
        vat_rate: 0.20,
        currency: "GBP",
        prohibited: &[
            "meat_unprocessed",
            "dairy_unlicensed",
            "plants_soil",
            "offensive_weapons",
            "indecent_materials",
        ],
        restricted: &[
            RestrictionNote::new("alcohol", "Personal use")
                .with_duty(DutyRate::Fixed(0.0))
                .with_allowance("1L spirits or 4L wine"),
            RestrictionNote::new("tobacco", "Personal use")
                .with_duty(DutyRate::Fixed(0.0))
                .with_allowance("200 cigarettes"),
            RestrictionNote::new("medicine", "Max 3 month supply with valid prescription"),
            RestrictionNote::new("food_animal_origin", "Prohibited from non-EU countries"),
        ],
        documentation: &["customs_declaration", "commercial_invoice", "import_license"],
        processing_days: ProcessingDays {
            air: 1,
            ship: 2,
            bus: 1,
        },
    },
    CountryRules {
        code: "US",
        duty_free_threshold: 800.0,
        vat_rate: 0.0,
        currency: "USD",
        prohibited: &[
            "kinder_eggs",
            "absinthe_high",
            "cuban_cigars",
            "raw_meat",
            "certain_cheeses",
            "haggis",
        ],
        restricted: &[
            RestrictionNote::new("alcohol", "Must be 21+")
                .with_duty(DutyRate::Varies)
                .with_allowance("1L"),
            RestrictionNote::new("tobacco", "Personal use")
                .with_allowance("200 cigarettes or 100 cigars"),
            RestrictionNote::new("food", "Must declare all food items"),
            RestrictionNote::new("currency", "Must declare").with_cash_limit(10_000.0, "USD"),
        ],
        documentation: &["CBP_form_6059B", "commercial_invoice"],
        processing_days: ProcessingDays {
            air: 1,
            ship: 5,
            bus: 1,
        },
    },
    CountryRules {
        code: "NG",
        duty_free_threshold: 50_000.0,
        vat_rate: 0.075,
        currency: "NGN",
        prohibited: &[
            "used_clothing_commercial",
            "certain_electronics_used",
            "poultry",
            "pork",
            "beef",
        ],
        restricted: &[
            RestrictionNote::new("electronics", "May require SONCAP certificate")
                .with_duty(DutyRate::Fixed(0.20)),
            RestrictionNote::new("textiles", "High duty on imported textiles")
                .with_duty(DutyRate::Fixed(0.35)),
            RestrictionNote::new("currency", "Must declare").with_cash_limit(5_000.0, "USD"),
        ],
        documentation: &["form_m", "son_certificate", "packing_list"],
        processing_days: ProcessingDays {
            air: 3,
            ship: 7,
            bus: 2,
        },
    },
    CountryRules {
        code: "GH",
        duty_free_threshold: 500.0,
        vat_rate: 0.125,
        currency: "GHS",
        prohibited: &["used_mattresses", "used_underwear", "hazardous_waste"],
        restricted: &[
            RestrictionNote::new("electronics", "Standard import duty")
                .with_duty(DutyRate::Fixed(0.20)),
            RestrictionNote::new("vehicles", "Age restrictions apply")
                .with_duty(DutyRate::Fixed(0.35)),
        ],
        documentation: &["customs_declaration", "bill_of_lading"],
        processing_days: ProcessingDays {
            air: 2,
            ship: 5,
            bus: 2,
        },
    },
    CountryRules {
        code: "KE",
        duty_free_threshold: 10_000.0,
        vat_rate: 0.16,
        currency: "KES",
        prohibited: &["plastic_bags", "used_tyres", "hazardous_materials"],
        restricted: &[
            RestrictionNote::new("electronics", "Import duty applies")
                .with_duty(DutyRate::Fixed(0.25)),
            RestrictionNote::new("textiles", "Protect local industry")
                .with_duty(DutyRate::Fixed(0.25)),
        ],
        documentation: &["IDF_form", "commercial_invoice"],
        processing_days: ProcessingDays {
            air: 2,
            ship: 7,
            bus: 3,
        },
    },
    CountryRules {
        code: "ZA",
        duty_free_threshold: 500.0,
        vat_rate: 0.15,
        currency: "ZAR",
        prohibited: &["illegal_drugs", "obscene_materials", "counterfeit_currency"],
        restricted: &[
            RestrictionNote::new("alcohol", "Personal use").with_allowance("1L spirits + 2L wine"),
            RestrictionNote::new("tobacco", "Personal use").with_allowance("200 cigarettes"),
            RestrictionNote::new("currency", "Must declare").with_cash_limit(25_000.0, "ZAR"),
        ],
        documentation: &["DA65", "commercial_invoice"],
        processing_days: ProcessingDays {
            air: 1,
            ship: 4,
            bus: 2,
        },
    },
    CountryRules {
        code: "FR",
        duty_free_threshold: 150.0,
        vat_rate: 0.20,
        currency: "EUR",
        prohibited: &["meat_unprocessed", "plants_soil", "counterfeit"],
        restricted: &[
            RestrictionNote::new("alcohol", "From non-EU").with_allowance("1L spirits or 4L wine"),
            RestrictionNote::new("perfume", "Personal use").with_allowance("50g"),
        ],
        documentation: &["CN22", "commercial_invoice"],
        processing_days: ProcessingDays {
            air: 1,
            ship: 3,
            bus: 1,
        },
    },
    CountryRules {
        code: "DE",
        duty_free_threshold: 150.0,
        vat_rate: 0.19,
        currency: "EUR",
        prohibited: &["nazi_memorabilia", "meat_unlicensed", "dangerous_goods"],
        restricted: &[
            RestrictionNote::new("alcohol", "Non-EU origin").with_allowance("1L spirits"),
            RestrictionNote::new("medicine", "Personal supply with documentation"),
        ],
        documentation: &["zollanmeldung", "commercial_invoice"],
        processing_days: ProcessingDays {
            air: 1,
            ship: 2,
            bus: 1,
        },
    },
    CountryRules {
        code: "CA",
        duty_free_threshold: 20.0,
        vat_rate: 0.05,
        currency: "CAD",
        prohibited: &["obscene_materials", "hate_propaganda", "certain_weapons"],
        restricted: &[
            RestrictionNote::new("alcohol", "Personal use")
                .with_allowance("1.5L wine or 1.14L spirits"),
            RestrictionNote::new("tobacco", "Personal use").with_allowance("200 cigarettes"),
            RestrictionNote::new("food", "Strict regulations on meat, dairy, plants"),
        ],
        documentation: &["B3_customs_form", "commercial_invoice"],
        processing_days: ProcessingDays {
            air: 1,
            ship: 4,
            bus: 1,
        },
    },
];

/// Rules for a country key, falling back to [`DEFAULT_COUNTRY_RULES`].
pub fn country_rules(code: &CountryCode) -> &'static CountryRules {
    COUNTRY_RULES
        .iter()
        .find(|rules| rules.code == code.as_str())
        .unwrap_or(&DEFAULT_COUNTRY_RULES)
}

/// Every mapped country followed by the default entry.
pub fn all_country_rules() -> impl Iterator<Item = &'static CountryRules> {
    COUNTRY_RULES
        .iter()
        .chain(std::iter::once(&DEFAULT_COUNTRY_RULES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_countries_get_default_rules() {
        let rules = country_rules(&CountryCode::new("JP"));
        assert_eq!(rules.code, "DEFAULT");
        assert_eq!(rules.prohibited, UNIVERSAL_PROHIBITED);
    }

    #[test]
    fn processing_days_only_cover_published_modes() {
        let ng = country_rules(&CountryCode::new("NG"));
        assert_eq!(ng.processing_days.for_mode(&TransportMode::Ship), Some(7));
        assert_eq!(ng.processing_days.for_mode(&TransportMode::Train), None);
    }

    #[test]
    fn every_country_key_is_unique() {
        let mut codes: Vec<_> = all_country_rules().map(|r| r.code).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
        assert_eq!(total, 11);
    }
}
