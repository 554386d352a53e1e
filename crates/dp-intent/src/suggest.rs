//! Human-readable one-line interpretations of a resolved request.

use dp_protocol::{Intent, ParameterSet};

/// Capability overview returned for `Intent::GetHelp`.
pub const HELP_TEXT: &str = "I can help you with:

📄 **Documents & Office**
• DOCX Documents - Create professional reports, memos, and letters
• Spreadsheets (XLSX) - Build budgets and financial models with formulas
• Presentations (PPTX) - Generate pitch decks and business presentations
• PDF Processing - Merge, split, extract, and rotate PDFs
• Theme Factory - Apply 10 professional color and font themes
• Document Polisher - Brand styling (McKinsey, Stripe, Apple, etc.)

🎨 **Creative & Design** - Algorithmic art, canvas designs, Slack GIFs
💻 **Web & Development** - React components, web apps, Playwright testing
💼 **Business & Communication** - Status reports, newsletters, brand guidelines
🔧 **Platform & Meta** - MCP servers, skills, multi-step workflows

Just tell me what you need in plain English! For example:
• \"Create a quarterly report for Q4 2024\"
• \"Make a budget for 2025 with categories: Marketing, Sales, Operations\"
• \"Generate a pitch deck presentation\"
• \"Apply McKinsey styling to my document\"";

/// Fallback for intents without a dedicated template.
pub const GENERIC_SUGGESTION: &str = "Process your request";

/// Render the suggestion for an intent, filling absent fields with defaults.
pub fn suggest(intent: Intent, parameters: &ParameterSet) -> String {
    let template = parameters.template_type.as_deref().unwrap_or("blank");

    match intent {
        Intent::CreateDocument => {
            let title = parameters.title.as_deref().unwrap_or("Untitled Document");
            format!("Create a {template} document titled '{title}'")
        }
        Intent::CreateSpreadsheet => {
            let year = parameters.year.as_deref().unwrap_or("current");
            format!("Create a {template} spreadsheet for {year}")
        }
        Intent::CreatePresentation => {
            let title = parameters
                .title
                .as_deref()
                .unwrap_or("Untitled Presentation");
            format!("Create a {template} presentation titled '{title}'")
        }
        Intent::ApplyTheme => {
            let theme = parameters.brand.as_deref().unwrap_or("a theme");
            format!("Apply {theme} styling to your document")
        }
        Intent::PolishDocument => {
            let brand = parameters.brand.as_deref().unwrap_or("professional");
            format!("Apply {brand} brand styling")
        }
        Intent::GetHelp => HELP_TEXT.to_string(),
        Intent::ProcessPdf
        | Intent::ChainOperations
        | Intent::Unknown
        | Intent::Conversation => GENERIC_SUGGESTION.to_string(),
    }
}
