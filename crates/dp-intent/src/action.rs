//! Action synthesis: maps a resolved intent to a client-executable action.

use serde_json::json;

use dp_protocol::{ActionDescriptor, ActionStep, Intent, ParameterSet};

/// Message carried by the `show_help` action.
pub const HELP_ACTION_MESSAGE: &str = "Here's what I can help you with...";

/// Dashboard routes the client navigates to.
pub mod routes {
    pub const DOCX: &str = "/dashboard-docx";
    pub const XLSX: &str = "/dashboard-xlsx";
    pub const PPTX: &str = "/dashboard-pptx";
    pub const PDF: &str = "/dashboard-pdf";
    pub const THEMES: &str = "/dashboard-themes";
    pub const POLISH: &str = "/dashboard-polish";
}

/// Theme pre-selected when a theme request names no brand.
pub const DEFAULT_THEME: &str = "ocean";
/// Brand pre-selected when a polish request names none.
pub const DEFAULT_BRAND: &str = "mckinsey";

/// Build the action for an intent, or `None` when the intent has no mapping.
pub fn synthesize(intent: Intent, parameters: &ParameterSet) -> Option<ActionDescriptor> {
    let template = parameters.template_type.as_deref().unwrap_or("blank");
    let title = parameters.title.as_deref().unwrap_or("");

    let action = match intent {
        Intent::CreateDocument => navigate(
            routes::DOCX,
            json!({ "template": template, "title": title }),
        ),
        Intent::CreateSpreadsheet => navigate(
            routes::XLSX,
            json!({
                "template": template,
                "year": parameters.year.as_deref().unwrap_or(""),
                "categories": parameters.categories.clone().unwrap_or_default(),
            }),
        ),
        Intent::CreatePresentation => navigate(
            routes::PPTX,
            json!({ "template": template, "title": title }),
        ),
        Intent::ApplyTheme => navigate(
            routes::THEMES,
            json!({ "theme": parameters.brand.as_deref().unwrap_or(DEFAULT_THEME) }),
        ),
        Intent::PolishDocument => navigate(
            routes::POLISH,
            json!({ "brand": parameters.brand.as_deref().unwrap_or(DEFAULT_BRAND) }),
        ),
        Intent::ChainOperations => ActionDescriptor::MultiStep {
            steps: vec![
                ActionStep {
                    action: "create".into(),
                    tool: "docx".into(),
                    parameters: parameters.clone(),
                },
                ActionStep {
                    action: "theme".into(),
                    tool: "themes".into(),
                    parameters: parameters.only_brand(),
                },
            ],
        },
        Intent::GetHelp => help_action(),
        Intent::ProcessPdf | Intent::Unknown | Intent::Conversation => return None,
    };

    Some(action)
}

/// The static `show_help` action.
pub fn help_action() -> ActionDescriptor {
    ActionDescriptor::ShowHelp {
        message: HELP_ACTION_MESSAGE.into(),
    }
}

fn navigate(target: &str, pre_fill: serde_json::Value) -> ActionDescriptor {
    ActionDescriptor::Navigate {
        target: target.into(),
        pre_fill,
    }
}
