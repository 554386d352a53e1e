use serde::{Deserialize, Serialize};

use crate::request::ParameterSet;

/// Structured instruction telling the client what to do with a resolved request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionDescriptor {
    /// Open a dashboard route with form fields pre-filled.
    Navigate {
        target: String,
        /// JSON object of form field → value.
        pre_fill: serde_json::Value,
    },

    /// Run several sub-actions in order.
    MultiStep { steps: Vec<ActionStep> },

    /// Show the capability overview.
    ShowHelp { message: String },
}

impl ActionDescriptor {
    /// Navigation route, if this action navigates.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Navigate { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn pre_fill(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Navigate { pre_fill, .. } => Some(pre_fill),
            _ => None,
        }
    }
}

/// One step of a multi-step action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionStep {
    /// Step verb, e.g. "create" or "theme".
    pub action: String,
    /// Tool the step runs against, e.g. "docx".
    pub tool: String,
    pub parameters: ParameterSet,
}
