//! Amadeus Rust client
//!
//! Minimal client for the Amadeus self-service API: client-credentials
//! authentication with an expiry-aware token cache, and the flight offers
//! search endpoint with typed (and forgiving) response models.
//!
//! # Quick Start
//!
//! ```no_run
//! use amadeus_rs::{AmadeusClient, Credentials};
//! use amadeus_rs::flight_offers::models::FlightOffersQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Load your API key pair (AMADEUS_CLIENT_ID / AMADEUS_CLIENT_SECRET)
//! let credentials = Credentials::from_env()?;
//!
//! // 2. Create a client
//! let client = AmadeusClient::new(credentials);
//!
//! // 3. Search
//! let offers = client
//!     .search_flight_offers(&FlightOffersQuery::one_way("MAD", "BCN", "2025-06-01"))
//!     .await?;
//!
//! println!("Found {} offers", offers.offers().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`AmadeusClient`] - HTTP client with the endpoint methods
//! - [`Credentials`] / [`TokenProvider`] - Authentication


// Core modules
pub mod auth;           // Credentials and token cache
pub mod client;         // Main HTTP client
pub mod errors;         // Error types
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod flight_offers;  // Flight offers search


// Re-exports for convenient access
pub use auth::{Credentials, TokenProvider};
pub use client::AmadeusClient;
pub use errors::AmadeusError;
