use std::collections::HashMap;

use crate::types::{AirlineStats, Flight, Summary};

pub const CHART_PALETTE: [&str; 6] = [
    "#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#06b6d4",
];

/// Per-airline average price over `flights`, in first-seen airline order.
pub fn airline_stats(flights: &[Flight]) -> Vec<AirlineStats> {
    let mut order: Vec<(&str, f64, usize)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();

    for f in flights {
        let i = *slot.entry(f.airline.as_str()).or_insert_with(|| {
            order.push((f.airline.as_str(), 0.0, 0));
            order.len() - 1
        });
        order[i].1 += f.price;
        order[i].2 += 1;
    }

    order
        .into_iter()
        .enumerate()
        .map(|(i, (airline, total, count))| AirlineStats {
            airline: airline.to_string(),
            avg_price: (total / count as f64).round(),
            flight_count: count,
            color: CHART_PALETTE[i % CHART_PALETTE.len()],
        })
        .collect()
}

/// Distinct airlines in first-seen order.
pub fn distinct_airlines(flights: &[Flight]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for f in flights {
        if !out.contains(&f.airline) {
            out.push(f.airline.clone());
        }
    }
    out
}

/// `sorted` must already be price-ascending; its head is the best price.
pub fn summarize(sorted: &[Flight], airline_count: usize) -> Summary {
    let total: f64 = sorted.iter().map(|f| f.price).sum();
    Summary {
        total_flights: sorted.len(),
        best_price: sorted.first().map(|f| f.price),
        avg_price: (!sorted.is_empty()).then(|| (total / sorted.len() as f64).round()),
        airline_count,
    }
}
