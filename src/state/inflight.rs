use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::types::SearchParams;

/// The one outstanding request id per search parameter set.
#[derive(Clone, Debug, Default)]
pub struct InFlight {
    pub requests: Arc<DashMap<SearchParams, Uuid>>,
}

impl InFlight {
    /// New request id for `params`, replacing any earlier one.
    pub fn begin(&self, params: &SearchParams) -> Uuid {
        let id = Uuid::new_v4();
        self.requests.insert(params.clone(), id);
        id
    }

    /// Clear the entry if `id` is still the current request. Returns false
    /// for a superseded (or already finished) request.
    pub fn finish(&self, params: &SearchParams, id: Uuid) -> bool {
        self.requests.remove_if(params, |_, current| *current == id).is_some()
    }

    /// Requests begun but not yet finished or abandoned.
    pub fn len(&self) -> usize {
        self.requests.len()
    }
}
