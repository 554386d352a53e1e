//! Rule-based intent resolution for DocPilot.
//!
//! Turns free text ("Create a quarterly report for Q4 2024") into a
//! `ParsedRequest`: a classified intent, extracted parameters, a confidence
//! score, a one-line suggestion and a client action. Everything here is pure
//! and synchronous; a compiled `PatternCatalog` is shared read-only between
//! requests.

pub mod action;
pub mod assist;
pub mod catalog;
pub mod classify;
pub mod engine;
pub mod error;
pub mod extract;
pub mod score;
pub mod suggest;

// Re-export key types for convenience
pub use action::synthesize;
pub use assist::{quick_action, quick_actions, tool_suggestions};
pub use catalog::{CatalogTables, PatternCatalog};
pub use engine::RuleEngine;
pub use error::{IntentError, IntentResult};
pub use score::score;
pub use suggest::suggest;
