//! Static assistant catalogs: per-tool tips and one-click prompts.

use dp_protocol::{QuickAction, ToolSuggestion};

/// Page contexts that have tips, with `(action, description)` pairs.
const TOOL_SUGGESTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "docx",
        &[
            ("Try a template", "Use Report, Memo, or Letter templates for faster creation"),
            ("Add branding", "After creating, apply professional themes with Theme Factory"),
            ("Convert to PDF", "Export your document as PDF for sharing"),
        ],
    ),
    (
        "xlsx",
        &[
            ("Use Budget template", "Pre-built quarterly budget tracker with formulas"),
            ("Financial Model", "Multi-year projection template with automatic calculations"),
            ("Import data", "Paste JSON data to create formatted tables instantly"),
        ],
    ),
    (
        "pptx",
        &[
            ("Pitch Deck template", "Startup pitch structure with best practices"),
            ("Business template", "Professional presentation layout"),
            ("Apply themes", "Use Theme Factory to brand your slides"),
        ],
    ),
    (
        "pdf",
        &[
            ("Merge PDFs", "Combine multiple PDF files into one"),
            ("Extract pages", "Pull specific pages from a PDF"),
            ("Rotate pages", "Fix page orientation"),
        ],
    ),
    (
        "themes",
        &[
            ("Preview themes", "See all 10 professional theme options"),
            ("Batch processing", "Apply same theme to multiple documents"),
        ],
    ),
    (
        "polish",
        &[
            ("McKinsey style", "Consulting-grade professional documents"),
            ("Stripe style", "Modern tech company aesthetic"),
            ("Economist style", "Editorial excellence for reports"),
        ],
    ),
];

/// `(id, icon, label, description, prompt)`
const QUICK_ACTIONS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "quick-report",
        "📄",
        "Quick Report",
        "Create a professional report in seconds",
        "Create a professional report titled 'Q4 2024 Analysis'",
    ),
    (
        "quick-budget",
        "💰",
        "Budget Template",
        "2025 budget tracker with formulas",
        "Create a budget for 2025 with categories: Salaries, Marketing, Operations",
    ),
    (
        "quick-pitch",
        "🚀",
        "Pitch Deck",
        "Investor presentation template",
        "Create a pitch deck presentation for a SaaS startup",
    ),
    (
        "quick-memo",
        "📝",
        "Quick Memo",
        "Business memo format",
        "Create a memo about the new remote work policy",
    ),
];

/// Tips for a page context; empty for an unrecognized context.
pub fn tool_suggestions(context: &str) -> Vec<ToolSuggestion> {
    TOOL_SUGGESTIONS
        .iter()
        .find(|(name, _)| *name == context)
        .map(|(_, tips)| {
            tips.iter()
                .map(|(action, description)| ToolSuggestion {
                    action: (*action).into(),
                    description: (*description).into(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// The four canned prompts, in display order.
pub fn quick_actions() -> Vec<QuickAction> {
    QUICK_ACTIONS.iter().map(to_quick_action).collect()
}

/// Look up a single quick action by id.
pub fn quick_action(id: &str) -> Option<QuickAction> {
    QUICK_ACTIONS
        .iter()
        .find(|entry| entry.0 == id)
        .map(to_quick_action)
}

fn to_quick_action(entry: &(&str, &str, &str, &str, &str)) -> QuickAction {
    let (id, icon, label, description, prompt) = *entry;
    QuickAction {
        id: id.into(),
        icon: icon.into(),
        label: label.into(),
        description: description.into(),
        prompt: prompt.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_contexts_have_tips() {
        for context in ["docx", "xlsx", "pptx", "pdf", "polish"] {
            assert_eq!(tool_suggestions(context).len(), 3, "{context}");
        }
        assert_eq!(tool_suggestions("themes").len(), 2);
    }

    #[test]
    fn unknown_context_is_empty() {
        assert!(tool_suggestions("home").is_empty());
        assert!(tool_suggestions("").is_empty());
        assert!(tool_suggestions("DOCX").is_empty());
    }

    #[test]
    fn docx_tips_content() {
        let tips = tool_suggestions("docx");
        assert_eq!(tips[0].action, "Try a template");
        assert!(tips[2].description.contains("PDF"));
    }

    #[test]
    fn four_quick_actions_in_order() {
        let ids: Vec<String> = quick_actions().into_iter().map(|a| a.id).collect();
        assert_eq!(
            ids,
            vec!["quick-report", "quick-budget", "quick-pitch", "quick-memo"]
        );
    }

    #[test]
    fn quick_action_lookup() {
        let memo = quick_action("quick-memo").unwrap();
        assert_eq!(memo.label, "Quick Memo");
        assert!(quick_action("quick-nothing").is_none());
    }
}
