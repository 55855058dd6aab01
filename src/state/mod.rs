pub mod inflight;

use std::sync::Arc;
use tokio::sync::{Notify, RwLock};
use uuid::Uuid;

use inflight::InFlight;

use crate::projection::Projection;
use crate::types::{FilterConfig, Flight, MaxStops, PriceCap, SearchParams};

/// Flights from the most recent accepted search.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub request_id: Uuid,
    pub params: SearchParams,
    pub flights: Arc<Vec<Flight>>,
}

/// What the renderer reads: the current search, its results and the
/// user's filter.
///
/// Only one request is tracked per parameter set and only the most recently
/// begun parameter set is displayed. A response that arrives after a newer
/// search was begun is dropped rather than cancelled.
///
/// There is a single renderer, so changes wake it with `notify_one`; a change
/// made while it is busy leaves a permit and is not lost.
#[derive(Clone, Debug)]
pub struct SearchSession {
    pub inflight: InFlight,
    pub active: Arc<RwLock<Option<SearchParams>>>,
    pub latest: Arc<RwLock<Option<SearchResults>>>,
    pub filter: Arc<RwLock<FilterConfig>>,
    pub notify: Arc<Notify>,
}

impl SearchSession {
    pub fn new(filter: FilterConfig) -> Self {
        Self {
            inflight: InFlight::default(),
            active: Arc::new(RwLock::new(None)),
            latest: Arc::new(RwLock::new(None)),
            filter: Arc::new(RwLock::new(filter)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Register a new search; it supersedes whatever was begun before.
    pub async fn begin(&self, params: &SearchParams) -> Uuid {
        let id = self.inflight.begin(params);
        *self.active.write().await = Some(params.clone());
        id
    }

    /// Store `flights` if `request_id` is still the current request for the
    /// active parameter set. Returns whether they were accepted.
    pub async fn complete(&self, params: &SearchParams, request_id: Uuid, flights: Vec<Flight>) -> bool {
        if !self.inflight.finish(params, request_id) {
            return false;
        }
        if self.active.read().await.as_ref() != Some(params) {
            return false;
        }
        *self.latest.write().await = Some(SearchResults {
            request_id,
            params: params.clone(),
            flights: Arc::new(flights),
        });
        self.notify.notify_one();
        true
    }

    /// Forget a failed request so a retry of the same params starts clean.
    pub fn abandon(&self, params: &SearchParams, request_id: Uuid) -> bool {
        self.inflight.finish(params, request_id)
    }

    /// Resolves once something the renderer shows has changed.
    pub async fn changed(&self) {
        self.notify.notified().await
    }

    /// Ask for a re-render without changing anything.
    pub fn request_render(&self) {
        self.notify.notify_one();
    }

    pub async fn results(&self) -> Option<SearchResults> {
        self.latest.read().await.clone()
    }

    pub async fn current_filter(&self) -> FilterConfig {
        self.filter.read().await.clone()
    }

    pub async fn set_max_stops(&self, max_stops: MaxStops) {
        self.filter.write().await.max_stops = max_stops.limit();
        self.notify.notify_one();
    }

    pub async fn set_max_price(&self, max_price: PriceCap) {
        self.filter.write().await.max_price = max_price.amount();
        self.notify.notify_one();
    }

    pub async fn toggle_airline(&self, airline: &str) {
        self.filter.write().await.toggle_airline(airline);
        self.notify.notify_one();
    }

    /// Re-derive the view from the latest results and the current filter.
    /// `None` until a search has been accepted.
    pub async fn projection(&self) -> Option<Projection> {
        let results = self.results().await?;
        let filter = self.current_filter().await;
        Some(Projection::build(&results.flights, &filter))
    }
}
