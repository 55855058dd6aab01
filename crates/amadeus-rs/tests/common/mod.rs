use amadeus_rs::auth::auth_loader::load_credentials_from_env;
use amadeus_rs::{AmadeusClient, Credentials};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};


pub const TEST_CLIENT_ID: &str = "test-client-id";
pub const TEST_CLIENT_SECRET: &str = "test-client-secret";


/// Client against the real test environment, for `#[ignore]`d live tests.
pub fn setup_client() -> AmadeusClient {
    let credentials = load_credentials_from_env().expect("Failed to load auth credentials");
    AmadeusClient::new(credentials)
}


/// In-process stand-in for the token and flight offers endpoints.
pub struct StubUpstream {
    pub base_url: String,
    pub state: Arc<StubState>,
}


pub struct StubState {
    pub token_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub expires_in: i64,
    pub offers_status: StatusCode,
    pub offers_body: Value,
    pub last_query: Mutex<Option<HashMap<String, String>>>,
    pub last_authorization: Mutex<Option<String>>,
}


impl StubUpstream {
    pub fn token_calls(&self) -> usize {
        self.state.token_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.state.search_calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> HashMap<String, String> {
        self.state.last_query.lock().unwrap().clone().unwrap_or_default()
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.state.last_authorization.lock().unwrap().clone()
    }

    pub fn client(&self) -> AmadeusClient {
        self.client_with(Credentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET))
    }

    pub fn client_with(&self, credentials: Credentials) -> AmadeusClient {
        AmadeusClient::new_with_config(credentials, Some(self.base_url.clone()))
    }
}


async fn token_handler(
    State(stub): State<Arc<StubState>>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let valid = form.get("grant_type").map(String::as_str) == Some("client_credentials")
        && form.get("client_id").map(String::as_str) == Some(TEST_CLIENT_ID)
        && form.get("client_secret").map(String::as_str) == Some(TEST_CLIENT_SECRET);
    if !valid {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid_client" })),
        );
    }
    let n = stub.token_calls.fetch_add(1, Ordering::SeqCst) + 1;
    (
        StatusCode::OK,
        Json(json!({
            "type": "amadeusOAuth2Token",
            "access_token": format!("token-{n}"),
            "expires_in": stub.expires_in,
            "state": "approved"
        })),
    )
}


async fn offers_handler(
    State(stub): State<Arc<StubState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    stub.search_calls.fetch_add(1, Ordering::SeqCst);
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *stub.last_authorization.lock().unwrap() = authorization.clone();
    *stub.last_query.lock().unwrap() = Some(query);
    match authorization {
        Some(a) if a.starts_with("Bearer token-") => {
            (stub.offers_status, Json(stub.offers_body.clone()))
        }
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "errors": [] }))),
    }
}


pub async fn spawn_stub(offers_status: StatusCode, offers_body: Value, expires_in: i64) -> StubUpstream {
    let state = Arc::new(StubState {
        token_calls: AtomicUsize::new(0),
        search_calls: AtomicUsize::new(0),
        expires_in,
        offers_status,
        offers_body,
        last_query: Mutex::new(None),
        last_authorization: Mutex::new(None),
    });
    let app = Router::new()
        .route("/v1/security/oauth2/token", post(token_handler))
        .route("/v2/shopping/flight-offers", get(offers_handler))
        .with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    StubUpstream {
        base_url: format!("http://{}", addr),
        state,
    }
}


/// Two offers shaped like a real test-environment response.
pub fn sample_offers() -> Value {
    json!({
        "meta": { "count": 2 },
        "data": [
            {
                "type": "flight-offer",
                "id": "1",
                "source": "GDS",
                "oneWay": false,
                "numberOfBookableSeats": 9,
                "itineraries": [{
                    "duration": "PT5H40M",
                    "segments": [{
                        "departure": { "iataCode": "JFK", "terminal": "4", "at": "2025-03-01T08:00:00" },
                        "arrival": { "iataCode": "LAX", "at": "2025-03-01T11:40:00" },
                        "carrierCode": "DL",
                        "number": "400",
                        "aircraft": { "code": "321" },
                        "duration": "PT5H40M",
                        "id": "1",
                        "numberOfStops": 0
                    }]
                }],
                "price": { "currency": "EUR", "total": "231.40", "base": "190.00", "grandTotal": "231.40" },
                "validatingAirlineCodes": ["DL"]
            },
            {
                "type": "flight-offer",
                "itineraries": [],
                "price": { "currency": "EUR", "total": 99 }
            }
        ],
        "dictionaries": { "carriers": { "DL": "DELTA AIR LINES" } }
    })
}
