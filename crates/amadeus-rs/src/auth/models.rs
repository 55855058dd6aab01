//! Auth module models.
//!
//! This module contains data structures for auth functionality.

use chrono::{DateTime, Duration, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;


/// API key pair for the client-credentials grant.
///
/// `Debug` never prints the secret.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}


impl Credentials {
    /// Create credentials directly from a key pair
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }


    /// Get reference to the API key (client id)
    pub fn client_id(&self) -> &str {
        &self.client_id
    }


    /// Get reference to the API secret
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }


    /// Form body for `POST /v1/security/oauth2/token`
    pub(crate) fn grant_form(&self) -> [(&'static str, &str); 3] {
        [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.trim()),
            ("client_secret", self.client_secret.trim()),
        ]
    }
}


impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[display("{} token, expires in {}s", token_type.as_deref().unwrap_or("unknown"), expires_in)]


/// Response model for the token endpoint.
///
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub state: Option<String>,
}


/// A bearer token together with the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}


impl AccessToken {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }


    /// Anchor a token response at `issued_at`.
    pub fn from_response(resp: TokenResponse, issued_at: DateTime<Utc>) -> Self {
        let lifetime = Duration::seconds(resp.expires_in.max(0));
        Self::new(resp.access_token, issued_at + lifetime)
    }


    pub fn value(&self) -> &str {
        &self.value
    }


    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }


    /// Usable at `now` with at least `margin` left before expiry.
    pub fn is_fresh(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        now + margin < self.expires_at
    }
}
