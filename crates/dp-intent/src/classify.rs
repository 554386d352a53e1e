//! Intent classification. First match wins across the priority-ordered groups.

use dp_protocol::Intent;

use crate::catalog::PatternCatalog;

impl PatternCatalog {
    /// Classify request text into an intent.
    ///
    /// The text is lowercased and nothing else. Groups are tried in declared
    /// order and patterns within a group likewise; the first unanchored hit
    /// selects the intent. No pattern matching at all yields `Intent::Unknown`.
    pub fn classify(&self, text: &str) -> Intent {
        let lower = text.to_lowercase();

        self.intents
            .iter()
            .find(|rule| rule.patterns.iter().any(|p| p.is_match(&lower)))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Unknown)
    }
}
