//! normalize.rs
//!
//! Flattens the upstream flight-offer schema into `Flight` records.
//!
//! Output is index-aligned with the input offers: same length, same order,
//! nothing dropped. Missing upstream fields never fail a record; each field
//! falls back to its own default.

use amadeus_rs::flight_offers::models::{FlightOffer, FlightOffersResponse};
use tracing::debug;

use crate::types::Flight;

pub const UNKNOWN_AIRLINE: &str = "Unknown";
pub const ZERO_DURATION: &str = "PT0M";

/// Decimal price string to number. Absent, blank, unparsable or non-finite
/// input is `0.0`. Nothing else is clamped, so a negative total stays negative.
pub fn parse_price(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Flatten one offer found at `index` in its response.
pub fn normalize_offer(index: usize, offer: &FlightOffer) -> Flight {
    let itinerary = offer.itineraries.as_ref().and_then(|its| its.first());
    let segments = itinerary
        .and_then(|it| it.segments.as_deref())
        .unwrap_or(&[]);
    let first = segments.first();

    let id = match offer.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => index.to_string(),
    };

    Flight {
        id,
        airline: first
            .and_then(|s| s.carrier_code.clone())
            .unwrap_or_else(|| UNKNOWN_AIRLINE.to_string()),
        price: parse_price(offer.price.as_ref().and_then(|p| p.total.as_deref())),
        stops: segments.len().saturating_sub(1) as u32,
        duration: itinerary
            .and_then(|it| it.duration.clone())
            .unwrap_or_else(|| ZERO_DURATION.to_string()),
        departure_time: first
            .and_then(|s| s.departure.as_ref())
            .and_then(|d| d.at.clone())
            .unwrap_or_default(),
    }
}

/// Flatten a whole response. No offers collection means no flights.
pub fn normalize(response: &FlightOffersResponse) -> Vec<Flight> {
    let flights: Vec<Flight> = response
        .offers()
        .iter()
        .enumerate()
        .map(|(i, offer)| normalize_offer(i, offer))
        .collect();
    debug!(offers = flights.len(), "normalized flight offers");
    flights
}
