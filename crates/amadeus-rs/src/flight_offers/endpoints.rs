//! Flight offers module endpoints.
//!
//! This module implements the shopping search endpoint.

use crate::client::AmadeusClient;
use crate::errors::AmadeusError;
use crate::flight_offers::models::{FlightOffersQuery, FlightOffersResponse};


const FLIGHT_OFFERS: &str = "/v2/shopping/flight-offers";


impl AmadeusClient {
    /// GET /v2/shopping/flight-offers
    /// Returns priced offers for a one-way trip
    pub async fn search_flight_offers(
        &self,
        params: &FlightOffersQuery,
    ) -> Result<FlightOffersResponse, AmadeusError> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| AmadeusError::Other(
                format!("Failed to serialize params: {}", e),
            ))?;
        let url = format!("{}?{}", FLIGHT_OFFERS, query);
        let resp = self.authenticated_get(&url).await?;
        let data: FlightOffersResponse = serde_json::from_str(&resp)?;
        Ok(data)
    }
}
