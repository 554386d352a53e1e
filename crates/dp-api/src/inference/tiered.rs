//! Tiered resolver — one resolver first, another when it fails or misses.
//!
//! A miss is a result with `Intent::Unknown`. The tier that actually produced
//! the answer is recorded in `Resolution.tier`.

use async_trait::async_trait;
use dp_protocol::Intent;

use super::{IntentResolver, Resolution, ResolveError};

/// Composite resolver that consults `fallback` only when `primary` cannot answer.
pub struct TieredResolver {
    primary: Box<dyn IntentResolver>,
    fallback: Box<dyn IntentResolver>,
}

impl TieredResolver {
    pub fn new(primary: Box<dyn IntentResolver>, fallback: Box<dyn IntentResolver>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl IntentResolver for TieredResolver {
    async fn resolve(&self, message: &str, context: &str) -> Result<Resolution, ResolveError> {
        let missed = match self.primary.resolve(message, context).await {
            Ok(result) if result.parsed.intent != Intent::Unknown => return Ok(result),
            Ok(result) => {
                tracing::debug!(
                    primary = self.primary.tier_name(),
                    fallback = self.fallback.tier_name(),
                    "primary resolver missed, falling back"
                );
                result
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    primary = self.primary.tier_name(),
                    fallback = self.fallback.tier_name(),
                    "primary resolver failed, falling back"
                );
                return self.fallback.resolve(message, context).await;
            }
        };

        match self.fallback.resolve(message, context).await {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback = self.fallback.tier_name(),
                    "fallback resolver failed, keeping primary miss"
                );
                Ok(missed)
            }
        }
    }

    fn tier_name(&self) -> &str {
        "tiered"
    }
}
