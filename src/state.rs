//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the `/api` forwarder via the `State`
//! extractor. It holds one pooled `reqwest::Client` and the back-end base
//! URL; nothing else is shared between requests.

use std::sync::Arc;

use crate::config::ConsoleConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build the forwarder client from host configuration.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the client cannot be built.
    pub fn new(config: &ConsoleConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().connect_timeout(config.backend_connect_timeout).build()?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
