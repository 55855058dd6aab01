//! Derived views over one search's flights.
//!
//! Everything here is a pure re-derivation: rebuilding with the same flights
//! and filter gives the same `Projection`, so it can be recomputed on every
//! filter change.

pub mod aggregate;
pub mod filter;

use serde::Serialize;

use crate::types::{AirlineStats, FilterConfig, Flight, Summary};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Filtered, cheapest first.
    pub flights: Vec<Flight>,
    /// Per-airline averages over `flights`.
    pub airline_stats: Vec<AirlineStats>,
    /// Every airline in the unfiltered input, for the airline selector.
    pub airlines: Vec<String>,
    pub summary: Summary,
}

impl Projection {
    pub fn build(flights: &[Flight], filter: &FilterConfig) -> Self {
        let sorted = filter::filter_and_sort(flights, filter);
        let airline_stats = aggregate::airline_stats(&sorted);
        let airlines = aggregate::distinct_airlines(flights);
        let summary = aggregate::summarize(&sorted, airlines.len());
        Self {
            flights: sorted,
            airline_stats,
            airlines,
            summary,
        }
    }
}
