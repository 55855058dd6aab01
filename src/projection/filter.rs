use crate::types::{FilterConfig, Flight};

/// Stops, price and airline checks. Bounds are inclusive.
pub fn matches(flight: &Flight, filter: &FilterConfig) -> bool {
    let matches_stops = flight.stops <= filter.max_stops;
    let matches_price = flight.price <= filter.max_price;
    let matches_airline = filter.selected_airlines.is_empty()
        || filter.selected_airlines.iter().any(|a| *a == flight.airline);
    matches_stops && matches_price && matches_airline
}

/// Matching flights, cheapest first. Equal prices keep their input order.
pub fn filter_and_sort(flights: &[Flight], filter: &FilterConfig) -> Vec<Flight> {
    let mut out: Vec<Flight> = flights
        .iter()
        .filter(|f| matches(f, filter))
        .cloned()
        .collect();
    // sort_by is stable
    out.sort_by(|a, b| a.price.total_cmp(&b.price));
    out
}
