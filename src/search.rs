//! search.rs
//!
//! One search cycle: register the request, fetch offers, normalize, and hand
//! the flights to the session if nothing newer was begun meanwhile.
//!
//! Upstream failures are not retried; they bubble up as a single error for
//! the caller to show.

use anyhow::{Context, Result};
use tracing::{info, warn};
use uuid::Uuid;

use amadeus_rs::AmadeusClient;
use amadeus_rs::flight_offers::models::FlightOffersResponse;

use crate::normalize::normalize;
use crate::state::SearchSession;
use crate::types::SearchParams;

/// Normalize `response` and offer it to the session.
/// Returns the flight count when accepted, `None` when superseded.
pub async fn ingest(
    session: &SearchSession,
    params: &SearchParams,
    request_id: Uuid,
    response: &FlightOffersResponse,
) -> Option<usize> {
    let flights = normalize(response);
    let count = flights.len();
    if session.complete(params, request_id, flights).await {
        info!(%request_id, flights = count, "search results accepted");
        Some(count)
    } else {
        warn!(%request_id, "search superseded, dropping {} flights", count);
        None
    }
}

pub async fn run_search(
    http: &AmadeusClient,
    session: &SearchSession,
    params: SearchParams,
) -> Result<Option<usize>> {
    let request_id = session.begin(&params).await;
    info!(
        %request_id,
        origin = %params.origin,
        destination = %params.destination,
        date = %params.departure_date,
        "searching flights"
    );

    let response = match http.search_flight_offers(&params.to_query()).await {
        Ok(r) => r,
        Err(e) => {
            session.abandon(&params, request_id);
            return Err(e).with_context(|| {
                format!(
                    "flight search {}->{} on {} failed",
                    params.origin, params.destination, params.departure_date
                )
            });
        }
    };

    Ok(ingest(session, &params, request_id, &response).await)
}
