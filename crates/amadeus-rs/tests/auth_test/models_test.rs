use amadeus_rs::auth::auth_loader::{load_credentials_with, AMADEUS_CLIENT_ID, AMADEUS_CLIENT_SECRET};
use amadeus_rs::auth::models::*;
use amadeus_rs::AmadeusError;
use chrono::{Duration, TimeZone, Utc};
use std::collections::HashMap;
#[test]


fn test_token_response_deserialization() {
    let json = r#"{"type":"amadeusOAuth2Token","username":"dev@example.com","application_name":"app","client_id":"abc","token_type":"Bearer","access_token":"xyz","expires_in":1799,"state":"approved","scope":""}"#;
    let resp: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.access_token, "xyz");
    assert_eq!(resp.expires_in, 1799);
    assert_eq!(resp.token_type.as_deref(), Some("Bearer"));
}
#[test]


fn test_access_token_freshness() {
    let issued = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let resp = TokenResponse {
        access_token: "t".to_string(),
        token_type: None,
        expires_in: 1800,
        state: None,
    };
    let token = AccessToken::from_response(resp, issued);
    let margin = Duration::seconds(30);
    assert!(token.is_fresh(issued, margin));
    assert!(token.is_fresh(issued + Duration::seconds(1769), margin));
    assert!(!token.is_fresh(issued + Duration::seconds(1770), margin));
    assert!(!token.is_fresh(issued + Duration::seconds(4000), margin));
}
#[test]


fn test_negative_lifetime_is_already_expired() {
    let issued = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let resp = TokenResponse {
        access_token: "t".to_string(),
        token_type: None,
        expires_in: -5,
        state: None,
    };
    let token = AccessToken::from_response(resp, issued);
    assert_eq!(token.expires_at(), issued);
    assert!(!token.is_fresh(issued, Duration::zero()));
}
#[test]


fn test_credentials_debug_redacts_secret() {
    let creds = Credentials::new("id-123", "super-secret");
    let printed = format!("{:?}", creds);
    assert!(printed.contains("id-123"));
    assert!(!printed.contains("super-secret"));
}
#[test]


fn test_load_credentials_with_lookup() {
    let mut vars = HashMap::new();
    vars.insert(AMADEUS_CLIENT_ID, "id");
    vars.insert(AMADEUS_CLIENT_SECRET, "secret");
    let creds = load_credentials_with(|k| vars.get(k).map(|v| v.to_string())).unwrap();
    assert_eq!(creds.client_id(), "id");
    assert_eq!(creds.client_secret(), "secret");
}
#[test]


fn test_load_credentials_reports_missing_key() {
    let mut vars = HashMap::new();
    vars.insert(AMADEUS_CLIENT_ID, "id");
    vars.insert(AMADEUS_CLIENT_SECRET, "   ");
    let err = load_credentials_with(|k| vars.get(k).map(|v| v.to_string())).unwrap_err();
    assert!(matches!(err, AmadeusError::MissingCredential(AMADEUS_CLIENT_SECRET)));
}
