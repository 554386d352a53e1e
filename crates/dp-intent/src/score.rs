//! Confidence scoring.

use dp_protocol::{Intent, ParameterSet};

/// Confidence for a resolved request.
///
/// `Unknown` is always 0.0. Any other intent starts at 0.5 and gains 0.1 per
/// extracted field, capped at 1.0. Only the field count matters.
pub fn score(intent: Intent, parameters: &ParameterSet) -> f64 {
    if intent == Intent::Unknown {
        return 0.0;
    }

    // Tenths keep the result exact (0.5, 0.6, ...) instead of accumulating 0.1s.
    let tenths = (5 + parameters.len()).min(10);
    tenths as f64 / 10.0
}
