//! Client-credentials authentication.
//!
//! [`Credentials`] hold the API key pair, [`TokenProvider`] exchanges them
//! for bearer tokens and keeps the current one until it is about to expire.

pub mod auth_loader;
pub mod models;
pub mod token_provider;

pub use models::{AccessToken, Credentials, TokenResponse};
pub use token_provider::TokenProvider;
