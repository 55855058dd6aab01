//! Expiry-aware bearer token cache.

use crate::auth::models::{AccessToken, Credentials, TokenResponse};
use crate::errors::AmadeusError;
use crate::helpers;
use chrono::{Duration, Utc};
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::debug;


const TOKEN_PATH: &str = "/v1/security/oauth2/token";


// Refresh this long before the upstream-declared expiry so a token never
// expires between `get_token` and the request that uses it.
const REFRESH_MARGIN_SECS: i64 = 30;


/// Owns the credentials and the current token for one [`AmadeusClient`].
///
/// Concurrent callers serialize on the cache lock, so at most one credential
/// exchange is in flight per provider.
///
/// [`AmadeusClient`]: crate::AmadeusClient
#[derive(Debug)]
pub struct TokenProvider {
    credentials: Credentials,
    cached: Mutex<Option<AccessToken>>,
}


impl TokenProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            cached: Mutex::new(None),
        }
    }


    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }


    /// Return a token valid for at least the refresh margin, exchanging the
    /// credentials first when the cached one is missing or stale.
    pub async fn get_token(
        &self,
        http_client: &Client,
        base_url: &str,
    ) -> Result<String, AmadeusError> {
        let mut cached = self.cached.lock().await;
        let margin = Duration::seconds(REFRESH_MARGIN_SECS);
        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Utc::now(), margin) {
                return Ok(token.value().to_string());
            }
            debug!(expires_at = %token.expires_at(), "access token stale, refreshing");
        }

        let token = self.exchange(http_client, base_url).await?;
        let value = token.value().to_string();
        *cached = Some(token);
        Ok(value)
    }


    /// Drop the cached token; the next `get_token` exchanges again.
    pub async fn invalidate(&self) {
        self.cached.lock().await.take();
    }


    async fn exchange(
        &self,
        http_client: &Client,
        base_url: &str,
    ) -> Result<AccessToken, AmadeusError> {
        let issued_at = Utc::now();
        let body = helpers::post_form(
                http_client,
                base_url,
                TOKEN_PATH,
                &self.credentials.grant_form()[..],
            )
            .await?;
        let resp: TokenResponse = serde_json::from_str(&body)?;
        debug!(client_id = self.credentials.client_id(), "obtained access token: {}", resp);
        Ok(AccessToken::from_response(resp, issued_at))
    }
}
