use crate::auth::{Credentials, TokenProvider};
use crate::errors::AmadeusError;
use crate::helpers;
use reqwest::Client;


// Amadeus self-service test environment
const AMADEUS_API: &str = "https://test.api.amadeus.com";


/// Main client for interacting with the Amadeus API.
///
/// The client owns its [`TokenProvider`], so every request made through it
/// shares one cached bearer token. Create a client with
/// [`AmadeusClient::new`] and call the endpoint methods on it.
///
/// # Available Endpoints
///
/// ## Shopping
/// - [`search_flight_offers`](AmadeusClient::search_flight_offers) - One-way flight offers search
///
/// # Example
/// ```no_run
/// use amadeus_rs::{AmadeusClient, Credentials};
/// use amadeus_rs::flight_offers::models::FlightOffersQuery;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::from_env()?;
/// let client = AmadeusClient::new(credentials);
///
/// let query = FlightOffersQuery::one_way("JFK", "LAX", "2025-03-01");
/// let offers = client.search_flight_offers(&query).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AmadeusClient {
    pub(crate) http_client: Client,
    pub(crate) tokens: TokenProvider,
    pub(crate) base_url: String,
}


impl AmadeusClient {
    /// Create a new AmadeusClient against the test environment
    pub fn new(credentials: Credentials) -> AmadeusClient {
        AmadeusClient {
            http_client: Client::new(),
            tokens: TokenProvider::new(credentials),
            base_url: AMADEUS_API.to_string(),
        }
    }


    /// Create a new AmadeusClient with custom API endpoint
    /// Useful for testing or using the production environment
    pub fn new_with_config(
        credentials: Credentials,
        configuration: Option<String>,
    ) -> AmadeusClient {
        AmadeusClient {
            http_client: Client::new(),
            tokens: TokenProvider::new(credentials),
            base_url: configuration.unwrap_or_else(|| AMADEUS_API.to_string()),
        }
    }


    pub fn base_url(&self) -> &str {
        &self.base_url
    }


    /// Current bearer token, exchanging credentials if needed
    pub async fn access_token(&self) -> Result<String, AmadeusError> {
        self.tokens.get_token(&self.http_client, &self.base_url).await
    }


    /// Forget the cached token
    pub async fn invalidate_token(&self) {
        self.tokens.invalidate().await;
    }


    /// Wrapper for bearer-authenticated GET requests
    pub async fn authenticated_get(&self, path: &str) -> Result<String, AmadeusError> {
        let token = self.access_token().await?;
        helpers::authenticated_get(&self.http_client, &self.base_url, &token, path).await
    }
}
