use crate::errors::AmadeusError;
use reqwest::{Client, Response};
// Helper functions for making bearer-authenticated and form requests
use url::Url;


/// Join the base URL and an absolute API path
pub(crate) fn build_url(base_url: &str, path: &str) -> Result<Url, AmadeusError> {
    let base = base_url.trim_end_matches('/');
    let url = format!("{}{}", base, path);
    Ok(Url::parse(&url)?)
}


/// Read the body and turn a non-success status into `AmadeusError::Http`
async fn read_body(resp: Response) -> Result<String, AmadeusError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(AmadeusError::Http { status, body });
    }
    Ok(body)
}


/// Make a bearer-authenticated GET request
pub(crate) async fn authenticated_get(
    http_client: &Client,
    base_url: &str,
    token: &str,
    path: &str,
) -> Result<String, AmadeusError> {
    let url = build_url(base_url, path)?;
    let resp = http_client
        .get(url)
        .bearer_auth(token)
        .send()
        .await?;
    read_body(resp).await
}


/// Make an unauthenticated POST with an `application/x-www-form-urlencoded` body
pub(crate) async fn post_form<T>(
    http_client: &Client,
    base_url: &str,
    path: &str,
    form: &T,
) -> Result<String, AmadeusError>
where
    T: serde::Serialize + ?Sized,
{
    let url = build_url(base_url, path)?;
    let resp = http_client
        .post(url)
        .form(form)
        .send()
        .await?;
    read_body(resp).await
}
