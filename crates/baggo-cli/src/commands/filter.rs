//! Filter, quick-check and search command implementations.

use super::read_json;
use crate::output;
use baggo_core::{
    filter_compatible_trips, quick_check_trips, search_compatible_trips, CompatibleTrip,
    RawTripBatch,
};

fn print_trips(trips: &[CompatibleTrip], table: bool) {
    if table {
        output::print_trip_header();
        for row in trips {
            println!("{}", output::format_trip_row(row));
        }
    } else {
        println!("{}", output::format_json(trips));
    }
}

pub fn run_filter(input: Option<String>, table: bool) -> Result<(), Box<dyn std::error::Error>> {
    let batch = read_json::<RawTripBatch>(input)?.normalize();
    print_trips(&filter_compatible_trips(&batch.trips, &batch.item), table);
    Ok(())
}

pub fn run_quick_check(
    input: Option<String>,
    table: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let batch = read_json::<RawTripBatch>(input)?.normalize();
    let rows = quick_check_trips(&batch.trips, &batch.item);

    if table {
        output::print_quick_check_header();
        for row in &rows {
            println!("{}", output::format_quick_check_row(row));
        }
    } else {
        println!("{}", output::format_json(&rows));
    }
    Ok(())
}

pub fn run_search(
    input: Option<String>,
    from: Option<String>,
    to: Option<String>,
    table: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let batch = read_json::<RawTripBatch>(input)?.normalize();
    let from = from.or(batch.from_country);
    let to = to.or(batch.to_country);

    let found = search_compatible_trips(&batch.trips, &batch.item, from.as_deref(), to.as_deref());
    print_trips(&found, table);
    Ok(())
}
