//! Intent resolution strategies for the AI router.
//!
//! Converts free text ("create a budget for 2025") into a `ParsedRequest`
//! with an intent, parameters, confidence, suggestion and action.
//!
//! Three strategies:
//! - **Rules** (local): the `dp-intent` pattern engine. Deterministic, no I/O.
//! - **Claude** (cloud): the Anthropic Messages API with tool use.
//! - **Tiered**: one strategy first, the other when it fails or finds nothing.

pub mod claude;
pub mod rules;
pub mod tiered;

use std::sync::Arc;

use async_trait::async_trait;
use dp_intent::IntentError;
use dp_protocol::ParsedRequest;

use crate::config::ResolverMode;

/// Result of resolving a message, tagged with the tier that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub parsed: ParsedRequest,
    /// Which resolver produced the result ("rules", "claude").
    pub tier: String,
}

/// Failures while resolving a message.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The rule engine could not be built.
    #[error("rule engine unavailable: {0}")]
    Engine(#[from] IntentError),

    /// The model endpoint failed, timed out, or answered with garbage.
    #[error("upstream model error: {0}")]
    Upstream(String),
}

/// Trait for resolvers that map natural language to a parsed request.
#[async_trait]
pub trait IntentResolver: Send + Sync {
    /// Resolve `message`, sent from the dashboard page named by `context`.
    async fn resolve(&self, message: &str, context: &str) -> Result<Resolution, ResolveError>;

    /// Name of this resolution tier (for logging/audit).
    fn tier_name(&self) -> &str;
}

pub use claude::{ClaudeConfig, ClaudeResolver};
pub use rules::RuleResolver;
pub use tiered::TieredResolver;

/// Build the resolver for `mode`. Claude modes without a config collapse to rules.
pub fn build_resolver(
    mode: ResolverMode,
    claude: Option<ClaudeConfig>,
) -> Result<Arc<dyn IntentResolver>, ResolveError> {
    let rules = RuleResolver::new()?;

    let resolver: Arc<dyn IntentResolver> = match (mode, claude) {
        (ResolverMode::Claude, Some(config)) => Arc::new(TieredResolver::new(
            Box::new(ClaudeResolver::new(config)?),
            Box::new(rules),
        )),
        (ResolverMode::LocalFirst, Some(config)) => Arc::new(TieredResolver::new(
            Box::new(rules),
            Box::new(ClaudeResolver::new(config)?),
        )),
        (ResolverMode::Rules, _) | (_, None) => Arc::new(rules),
    };

    Ok(resolver)
}
