//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the ingestion client used by the upload proxy and the
//! authenticator consulted at entry routes. Nothing in it is mutated after
//! startup.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::auth::{Authenticator, NoAuth};
use crate::services::ingest::{IngestClient, ProxyError};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub ingest: IngestClient,
    pub auth: Arc<dyn Authenticator>,
}

impl AppState {
    /// Build state from config with the pass-through authenticator.
    ///
    /// # Errors
    ///
    /// Returns an error if the ingestion HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let ingest = IngestClient::new(config.upload_backend_url.clone())?;
        Ok(Self { ingest, auth: Arc::new(NoAuth) })
    }

    /// Replace the authenticator.
    #[must_use]
    pub fn with_auth(mut self, auth: Arc<dyn Authenticator>) -> Self {
        self.auth = auth;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` forwarding uploads to `upload_url`.
    #[must_use]
    pub fn test_app_state(upload_url: &str) -> AppState {
        let config = ServerConfig { upload_backend_url: upload_url.to_owned(), ..ServerConfig::default() };
        AppState::new(&config).expect("test state should build")
    }
}
