//! Shared application state for the Axum server.

use std::sync::Arc;

use crate::config::ResolverMode;
use crate::inference::{IntentResolver, ResolveError, RuleResolver};

/// Shared application state, cheap to clone into each handler.
#[derive(Clone)]
pub struct AppState {
    /// Resolver answering `/api/ai/parse`.
    pub resolver: Arc<dyn IntentResolver>,
    /// Configured resolution mode (reported by `/api/ai/health`).
    pub mode: ResolverMode,
    /// Allowed CORS origins. Empty allows any.
    pub cors_origins: Arc<[String]>,
}

impl AppState {
    pub fn new(resolver: Arc<dyn IntentResolver>, mode: ResolverMode) -> Self {
        Self {
            resolver,
            mode,
            cors_origins: Arc::from(Vec::new()),
        }
    }

    /// Rule-only state (tests and development).
    pub fn with_rules() -> Result<Self, ResolveError> {
        Ok(Self::new(Arc::new(RuleResolver::new()?), ResolverMode::Rules))
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Arc::from(origins);
        self
    }
}
