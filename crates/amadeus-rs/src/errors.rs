use reqwest::StatusCode;


/// Every failure the client can surface.
///
/// Callers that only need a "search failed" signal can treat all variants
/// alike; the split exists so logs say which hop broke.
#[derive(Debug, thiserror::Error)]
pub enum AmadeusError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("Error: {0}")]
    Other(String),
}


impl AmadeusError {
    /// True when the upstream rejected our credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AmadeusError::Http { status, .. } if *status == StatusCode::UNAUTHORIZED
        )
    }
}


impl From<String> for AmadeusError {
    fn from(s: String) -> AmadeusError {
        AmadeusError::Other(s)
    }
}
