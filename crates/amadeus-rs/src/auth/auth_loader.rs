use crate::auth::models::Credentials;
use crate::errors::AmadeusError;
use std::env;


// Environment variable names for authentication
pub const AMADEUS_CLIENT_ID: &str = "AMADEUS_CLIENT_ID";
pub const AMADEUS_CLIENT_SECRET: &str = "AMADEUS_CLIENT_SECRET";


/// Load the API key pair from the environment
///
/// Expects:
/// - AMADEUS_CLIENT_ID: the API key from the Amadeus developer portal
/// - AMADEUS_CLIENT_SECRET: the matching API secret
pub fn load_credentials_from_env() -> Result<Credentials, AmadeusError> {
    load_credentials_with(|key| env::var(key).ok())
}


/// Same as [`load_credentials_from_env`] but reads through `lookup`.
///
/// Blank values count as missing.
pub fn load_credentials_with<F>(lookup: F) -> Result<Credentials, AmadeusError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &'static str| {
        lookup(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or(AmadeusError::MissingCredential(key))
    };
    let client_id = read(AMADEUS_CLIENT_ID)?;
    let client_secret = read(AMADEUS_CLIENT_SECRET)?;
    Ok(Credentials::new(client_id, client_secret))
}


impl Credentials {
    /// Shorthand for [`load_credentials_from_env`].
    pub fn from_env() -> Result<Self, AmadeusError> {
        load_credentials_from_env()
    }
}
