//! Reference-table lookup commands.

use crate::output;
use baggo_core::{customs_rules_for, get_country_code};
use baggo_rules::hs_codes;

pub fn run_rules(country: String) -> Result<(), Box<dyn std::error::Error>> {
    let rules = customs_rules_for(&country);
    if rules.code == "DEFAULT" {
        tracing::info!(country = %country, "no specific rules, showing defaults");
    }
    println!("{}", output::format_json(rules));
    Ok(())
}

pub fn run_hs_codes(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let entries: Vec<_> = hs_codes().collect();
        println!("{}", output::format_json(&entries));
    } else {
        output::print_hs_header();
        for entry in hs_codes() {
            println!("{}", output::format_hs_row(entry));
        }
    }
    Ok(())
}

pub fn run_country_code(name: String) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", get_country_code(&name));
    Ok(())
}
