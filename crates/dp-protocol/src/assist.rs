use serde::{Deserialize, Serialize};

/// A contextual tip shown next to a dashboard tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSuggestion {
    pub action: String,
    pub description: String,
}

/// A canned one-click prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub id: String,
    pub icon: String,
    pub label: String,
    pub description: String,
    /// Natural-language text submitted to the resolver when clicked.
    pub prompt: String,
}
