use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

const UNITS: &str = r"milliseconds?|msecs?|ms|seconds?|secs?|s|minutes?|mins?|m|hours?|hrs?|h|days?|d|weeks?|w|years?|yrs?|y";

lazy_static! {
    static ref DURATION_FORMAT: Regex =
        Regex::new(&format!(r"^(?:\d+(?:\.\d+)?\s*(?:{UNITS})?\s*)+$")).unwrap();
    static ref DURATION_COMPONENT: Regex =
        Regex::new(&format!(r"(\d+(?:\.\d+)?)\s*({UNITS})?")).unwrap();
}

fn unit_millis(unit: &str) -> f64 {
    match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => 1_000.0,
        "m" | "min" | "mins" | "minute" | "minutes" => 60_000.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600_000.0,
        "d" | "day" | "days" => 86_400_000.0,
        "w" | "week" | "weeks" => 604_800_000.0,
        "y" | "yr" | "yrs" | "year" | "years" => 31_557_600_000.0,
        // ms and a bare number
        _ => 1.0,
    }
}

/// Parses a human duration such as `10m`, `1h30m`, `1.5 hours` or `5000`.
///
/// A bare number is read as milliseconds. Returns `None` for anything that is
/// not made up entirely of duration components, and for a zero total.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim().to_lowercase();
    debug!("Parsing duration: {}", input);

    if input.is_empty() || !DURATION_FORMAT.is_match(&input) {
        return None;
    }

    let mut millis = 0.0_f64;
    for capture in DURATION_COMPONENT.captures_iter(&input) {
        let value = capture.get(1)?.as_str().parse::<f64>().ok()?;
        let unit = capture.get(2).map_or("", |unit| unit.as_str());
        millis += value * unit_millis(unit);
    }

    let millis = millis.round();
    if !millis.is_finite() || millis < 1.0 || millis > u64::MAX as f64 {
        return None;
    }

    let duration = Duration::from_millis(millis as u64);
    debug!("Parsed duration: {:?}", duration);
    Some(duration)
}
