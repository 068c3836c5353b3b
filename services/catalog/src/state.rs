//! Application state shared across request handlers.

use std::sync::Arc;

use crate::store::ListingStore;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    listings: Arc<dyn ListingStore>,
}

impl AppState {
    pub fn new(listings: Arc<dyn ListingStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { listings }),
        }
    }

    pub fn listings(&self) -> &dyn ListingStore {
        self.inner.listings.as_ref()
    }
}
