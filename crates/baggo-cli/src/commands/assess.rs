//! Assess command implementation.

use super::{load_config, read_json};
use crate::output;
use baggo_core::{input::RawShipmentRequest, Assessor};
use chrono::{DateTime, Utc};

pub fn run(
    input: Option<String>,
    config: Option<String>,
    table: bool,
    at: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config.as_deref())?;
    let request = read_json::<RawShipmentRequest>(input)?.normalize();
    let assessor = Assessor::new(config);

    let result = match at {
        Some(at) => {
            let now = DateTime::parse_from_rfc3339(&at)
                .map_err(|e| format!("Invalid --at time {}: {}", at, e))?
                .with_timezone(&Utc);
            assessor.assess_at(&request, now, &mut rand::thread_rng())
        }
        None => assessor.assess(&request),
    };

    if table {
        println!("{}", output::format_assessment_summary(&result));
    } else {
        println!("{}", output::format_json(&result));
    }
    Ok(())
}
