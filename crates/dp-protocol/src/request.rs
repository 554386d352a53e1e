use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;
use crate::intent::Intent;

/// Secondary fields extracted from a request.
///
/// A field that could not be extracted is `None` and is left out of the
/// serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl ParameterSet {
    /// Number of fields present.
    pub fn len(&self) -> usize {
        [
            self.title.is_some(),
            self.template_type.is_some(),
            self.brand.is_some(),
            self.year.is_some(),
            self.categories.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy carrying only the brand field.
    pub fn only_brand(&self) -> Self {
        Self {
            brand: self.brand.clone(),
            ..Self::default()
        }
    }
}

/// Result of resolving one natural-language request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRequest {
    pub intent: Intent,
    pub parameters: ParameterSet,
    /// Heuristic certainty in `[0.0, 1.0]`.
    pub confidence: f64,
    /// One-line human-readable interpretation.
    pub suggestion: String,
    /// Client-executable action, `null` when the intent has none.
    pub action: Option<ActionDescriptor>,
}
