// src/report.rs
use std::fmt::Write;
use tracing::info;

use crate::format::{airline_badge, format_departure, format_duration, format_price, format_stops};
use crate::projection::Projection;
use crate::state::{SearchResults, SearchSession};
use crate::types::FilterConfig;

const BAR_WIDTH: f64 = 30.0;

pub fn log_projection(results: &SearchResults, p: &Projection) {
    info!(
        request_id = %results.request_id,
        total_flights = p.summary.total_flights,
        best_price = ?p.summary.best_price,
        avg_price = ?p.summary.avg_price,
        airlines = p.summary.airline_count,
        "results snapshot"
    );
    for s in &p.airline_stats {
        info!(
            airline = %s.airline,
            avg_price = s.avg_price,
            flights = s.flight_count,
            color = s.color,
            "airline average"
        );
    }
}

fn describe_filter(filter: &FilterConfig) -> String {
    let stops = if filter.max_stops == u32::MAX {
        "any stops".to_string()
    } else {
        format!("<= {} stops", filter.max_stops)
    };
    let airlines = if filter.selected_airlines.is_empty() {
        "all airlines".to_string()
    } else {
        filter.selected_airlines.join(",")
    };
    format!("{}, <= {}, {}", stops, format_price(filter.max_price), airlines)
}

/// Log and print the current view. Nothing to show before the first
/// accepted search.
pub async fn show(session: &SearchSession) {
    let (Some(results), Some(projection)) = (session.results().await, session.projection().await) else {
        return;
    };
    let filter = session.current_filter().await;
    log_projection(&results, &projection);
    println!("{}", render(&results, &projection, &filter));
}

/// Plain-text rendering: headline numbers, one row per flight, then the
/// per-airline average bars.
pub fn render(results: &SearchResults, p: &Projection, filter: &FilterConfig) -> String {
    let mut out = String::new();
    let params = &results.params;
    let _ = writeln!(
        out,
        "{} -> {} on {}",
        params.origin, params.destination, params.departure_date
    );
    let _ = writeln!(out, "Filters: {}", describe_filter(filter));
    let _ = writeln!(out, "Available airlines: {}", p.airlines.join(" "));

    if p.flights.is_empty() {
        let _ = writeln!(out, "No flights found. Try adjusting your filters or search criteria.");
        return out;
    }

    let s = &p.summary;
    let _ = writeln!(
        out,
        "Total flights: {} | Best price: {} | Avg price: {} | Airlines: {}",
        s.total_flights,
        format_price(s.best_price.unwrap_or(0.0)),
        format_price(s.avg_price.unwrap_or(0.0)),
        s.airline_count
    );
    let _ = writeln!(out);

    for (i, f) in p.flights.iter().enumerate() {
        let _ = writeln!(
            out,
            "[{:<2}] {:<8} {}  {:<9} {:<9} {:>10}{}",
            airline_badge(&f.airline),
            f.airline,
            format_departure(&f.departure_time),
            format_stops(f.stops),
            format_duration(&f.duration),
            format_price(f.price),
            if i == 0 { "  * best deal" } else { "" }
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Average price by airline:");
    let top = p
        .airline_stats
        .iter()
        .map(|s| s.avg_price)
        .fold(0.0_f64, f64::max);
    for a in &p.airline_stats {
        let len = if top > 0.0 {
            ((a.avg_price.max(0.0) / top) * BAR_WIDTH).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<8} {:<30} {} ({} flights, {})",
            a.airline,
            "#".repeat(len),
            format_price(a.avg_price),
            a.flight_count,
            a.color
        );
    }
    out
}
