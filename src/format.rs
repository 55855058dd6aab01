//! Presentation helpers for a single `Flight` row.

use chrono::{DateTime, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PT(?:(\d+)H)?(\d+)?M").expect("duration pattern"));

/// `PT2H30M` -> `2h 30m`. Missing hours or minutes render as `0`.
/// The trailing `M` is required, so `PT2H` is returned unchanged, as is
/// input with neither component. The leftmost match wins when the token is
/// embedded in longer text.
pub fn format_duration(duration: &str) -> String {
    let Some(caps) = DURATION_RE.captures(duration) else {
        return duration.to_string();
    };
    let hours = caps.get(1).map(|m| m.as_str());
    let minutes = caps.get(2).map(|m| m.as_str());
    if hours.is_none() && minutes.is_none() {
        return duration.to_string();
    }
    format!("{}h {}m", hours.unwrap_or("0"), minutes.unwrap_or("0"))
}

pub fn format_stops(stops: u32) -> String {
    match stops {
        0 => "Non-stop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}

/// Local `HH:MM` of an ISO departure timestamp.
pub fn format_departure(departure_time: &str) -> String {
    if departure_time.is_empty() {
        return "--:--".to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(departure_time, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%H:%M").to_string();
    }
    match DateTime::parse_from_rfc3339(departure_time) {
        Ok(dt) => dt.format("%H:%M").to_string(),
        Err(_) => departure_time.to_string(),
    }
}

/// Two-character badge shown beside the airline.
pub fn airline_badge(airline: &str) -> String {
    airline.chars().take(2).collect()
}

/// Whole prices print without a fractional part.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}
