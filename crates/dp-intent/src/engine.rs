//! Rule-based request orchestration.

use std::sync::Arc;

use dp_protocol::{Intent, ParameterSet, ParsedRequest};

use crate::action::synthesize;
use crate::catalog::PatternCatalog;
use crate::error::IntentResult;
use crate::score::score;
use crate::suggest::suggest;

/// Resolves free text into a `ParsedRequest` using the pattern catalog.
///
/// Cheap to clone; the compiled catalog is shared.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    catalog: Arc<PatternCatalog>,
}

impl RuleEngine {
    /// Build an engine over the built-in catalog.
    pub fn new() -> IntentResult<Self> {
        Ok(Self::with_catalog(PatternCatalog::compile()?))
    }

    pub fn with_catalog(catalog: PatternCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn classify(&self, text: &str) -> Intent {
        self.catalog.classify(text)
    }

    pub fn extract(&self, text: &str) -> ParameterSet {
        self.catalog.extract(text)
    }

    /// Classify, extract, score, suggest and synthesize in a single pass.
    ///
    /// `context` (the page the user is on) does not influence rule-based
    /// resolution; it is accepted so every resolver shares one signature.
    pub fn resolve(&self, message: &str, context: &str) -> ParsedRequest {
        let intent = self.classify(message);
        let parameters = self.extract(message);
        let confidence = score(intent, &parameters);

        tracing::debug!(
            intent = %intent,
            fields = parameters.len(),
            confidence,
            context,
            "rule-based resolution"
        );

        ParsedRequest {
            suggestion: suggest(intent, &parameters),
            action: synthesize(intent, &parameters),
            intent,
            parameters,
            confidence,
        }
    }
}
