//! Check command implementation.

use super::read_json;
use crate::output;
use baggo_core::{check_compatibility, input::RawShipmentRequest};

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let request = read_json::<RawShipmentRequest>(input)?.normalize();
    let verdict = check_compatibility(&request.trip, &request.item);
    println!("{}", output::format_json(&verdict));
    Ok(())
}
