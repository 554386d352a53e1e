use serde::{Deserialize, Serialize};

/// What the user asked the platform to do.
///
/// Exactly one intent is resolved per request. `Conversation` is only ever
/// produced by the LLM resolver, when the model replies in prose instead of
/// selecting a tool; the rule-based classifier never returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CreateDocument,
    CreateSpreadsheet,
    CreatePresentation,
    ProcessPdf,
    ApplyTheme,
    PolishDocument,
    ChainOperations,
    GetHelp,
    Unknown,
    Conversation,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDocument => "create_document",
            Self::CreateSpreadsheet => "create_spreadsheet",
            Self::CreatePresentation => "create_presentation",
            Self::ProcessPdf => "process_pdf",
            Self::ApplyTheme => "apply_theme",
            Self::PolishDocument => "polish_document",
            Self::ChainOperations => "chain_operations",
            Self::GetHelp => "get_help",
            Self::Unknown => "unknown",
            Self::Conversation => "conversation",
        }
    }

    /// Whether the rule-based synthesizer produces an action for this intent.
    pub fn has_action(&self) -> bool {
        matches!(
            self,
            Self::CreateDocument
                | Self::CreateSpreadsheet
                | Self::CreatePresentation
                | Self::ApplyTheme
                | Self::PolishDocument
                | Self::ChainOperations
                | Self::GetHelp
        )
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
