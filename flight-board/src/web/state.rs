//! Application state for the web layer.

use std::sync::Arc;

use crate::flights::FlightStatusClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Flight-status API client
    pub client: Arc<FlightStatusClient>,

    /// Rows requested per page
    pub page_size: u32,
}

impl AppState {
    /// Create a new app state.
    pub fn new(client: FlightStatusClient) -> Self {
        let page_size = client.page_size();
        Self {
            client: Arc::new(client),
            page_size,
        }
    }
}
