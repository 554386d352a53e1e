//! Rule-based resolver backed by the `dp-intent` pattern engine.

use async_trait::async_trait;
use dp_intent::RuleEngine;

use super::{IntentResolver, Resolution, ResolveError};

/// Local, deterministic resolver. Never fails once constructed.
#[derive(Debug, Clone)]
pub struct RuleResolver {
    engine: RuleEngine,
}

impl RuleResolver {
    /// Compile the built-in pattern catalog.
    pub fn new() -> Result<Self, ResolveError> {
        Ok(Self::with_engine(RuleEngine::new()?))
    }

    pub fn with_engine(engine: RuleEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl IntentResolver for RuleResolver {
    async fn resolve(&self, message: &str, context: &str) -> Result<Resolution, ResolveError> {
        Ok(Resolution {
            parsed: self.engine.resolve(message, context),
            tier: self.tier_name().into(),
        })
    }

    fn tier_name(&self) -> &str {
        "rules"
    }
}
