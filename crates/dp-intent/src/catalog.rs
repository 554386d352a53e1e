//! The ordered regex tables behind classification and extraction.
//!
//! Declaration order is semantically load-bearing: intent groups are tried
//! top to bottom and the first group with any matching pattern wins, and the
//! keyword tables resolve to their first matching entry. The tables are kept
//! as ordered slices, never maps.

use regex::Regex;

use dp_protocol::Intent;

use crate::error::{IntentError, IntentResult};

// ── Intent groups ─────────────────────────────────────────────

/// Intent patterns, matched against the lowercased request text.
const INTENT_PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::CreateDocument,
        &[
            r"create\s+(a\s+|an\s+)?((professional|quarterly|annual|monthly|weekly|business|formal|short)\s+)?(document|docx|doc|report|memo|letter)",
            r"generate\s+(a\s+|an\s+)?((professional|quarterly|annual|monthly|weekly|business|formal|short)\s+)?(document|docx|doc|report|memo|letter)",
            r"make\s+(a\s+|an\s+)?((professional|quarterly|annual|monthly|weekly|business|formal|short)\s+)?(document|docx|doc|report|memo|letter)",
            r"write\s+(a\s+|an\s+)?((professional|quarterly|annual|monthly|weekly|business|formal|short)\s+)?(document|docx|doc|report|memo|letter)",
            r"new\s+(document|docx|doc|report|memo|letter)",
            r"(professional|business)\s+report",
        ],
    ),
    (
        Intent::CreateSpreadsheet,
        &[
            r"create\s+(a\s+)?(spreadsheet|xlsx|excel|budget|financial\s+model|quarterly\s+budget|annual\s+budget)",
            r"generate\s+(a\s+)?(spreadsheet|xlsx|budget)",
            r"make\s+(a\s+)?(spreadsheet|xlsx|budget)",
            r"build\s+(a\s+)?(spreadsheet|xlsx|budget)",
            r"new\s+(spreadsheet|xlsx|budget)",
            r"budget\s+for",
        ],
    ),
    (
        Intent::CreatePresentation,
        &[
            r"create\s+(a\s+)?(presentation|pptx|powerpoint|slides|deck|pitch)",
            r"generate\s+(a\s+)?(presentation|pptx|slides|pitch\s+deck)",
            r"make\s+(a\s+)?(presentation|pptx|slides|pitch\s+deck|deck)",
            r"build\s+(a\s+)?(presentation|slides|pitch)",
            r"new\s+(presentation|pptx|slides)",
            r"pitch\s+deck",
        ],
    ),
    (
        Intent::ProcessPdf,
        &[
            r"(merge|split|extract|rotate|process)\s+pdf",
            r"pdf\s+(merge|split|extract|rotate|process)",
            r"combine\s+pdfs",
        ],
    ),
    (
        Intent::ApplyTheme,
        &[
            r"apply\s+(a\s+)?(theme|style|color)",
            r"theme\s+(this|the|my)",
            r"style\s+(this|the|my)",
            r"add\s+(theme|styling)",
        ],
    ),
    (
        Intent::PolishDocument,
        &[
            r"polish\s+(this|the|my|document)",
            r"apply\s+(brand|styling)",
            r"(mckinsey|deloitte|stripe|apple|economist|kpmg|ibm|notion|linear|figma)\s+styl",
            r"professional\s+styling",
            r"style\s+with",
        ],
    ),
    (
        Intent::ChainOperations,
        &[
            r"create.*then.*apply",
            r"create.*and.*theme",
            r"make.*then.*polish",
            r"generate.*and.*export",
        ],
    ),
    (
        Intent::GetHelp,
        &[
            r"^(help|what|how|explain)",
            r"what\s+(can|should|do)",
            r"how\s+(do|to)",
            r"show\s+me",
        ],
    ),
];

// ── Keyword tables ────────────────────────────────────────────

/// Template type keywords, matched against the lowercased request text.
const TEMPLATE_PATTERNS: &[(&str, &[&str])] = &[
    ("blank", &[r"blank", r"empty", r"from\s+scratch"]),
    ("report", &[r"report", r"quarterly", r"annual"]),
    ("memo", &[r"memo", r"memorandum"]),
    ("letter", &[r"letter", r"correspondence"]),
    ("budget", &[r"budget"]),
    ("financial-model", &[r"financial\s+model", r"projection"]),
    ("business", &[r"business\s+presentation"]),
    ("pitch", &[r"pitch\s+deck", r"investor\s+pitch"]),
];

/// Brand keywords, matched against the lowercased request text.
const BRAND_PATTERNS: &[(&str, &[&str])] = &[
    ("economist", &[r"economist"]),
    ("mckinsey", &[r"mckinsey", r"consulting"]),
    ("deloitte", &[r"deloitte"]),
    ("kpmg", &[r"kpmg"]),
    ("stripe", &[r"stripe"]),
    ("apple", &[r"apple"]),
    ("ibm", &[r"ibm"]),
    ("notion", &[r"notion"]),
    ("linear", &[r"linear"]),
    ("figma", &[r"figma"]),
];

// ── Field patterns ────────────────────────────────────────────
// Applied to the unmodified request text so captured values keep their case.

const QUOTED_TITLE: &str = r#"['"]([^'"]+)['"]"#;
const NAMED_TITLE: &str = r"(?i)\b(?:titled|called|named)\s+(.+?)(?:\s+(?:with|using|in|for)\b|$)";
const FOR_TITLE: &str = r"(?i)\bfor\s+(?:the\s+)?(.+?)(?:\s+(?:with|using|in|for)\b|$)";
const YEAR: &str = r"\b(20\d{2})\b";
const CATEGORIES: &str = r"(?i)\b(?:categor(?:y|ies)|items?|sections?|topics?)(?:\s+(?:like|for|including))?\s*:?\s*(.+?)(?:\s+(?:with|using|in|for)\b|$)";
const CATEGORY_SEPARATOR: &str = r"[,\s]+and\s+|,\s*";

/// Source tables a `PatternCatalog` is compiled from.
#[derive(Debug, Clone, Copy)]
pub struct CatalogTables {
    pub intents: &'static [(Intent, &'static [&'static str])],
    pub template_types: &'static [(&'static str, &'static [&'static str])],
    pub brands: &'static [(&'static str, &'static [&'static str])],
    pub quoted_title: &'static str,
    pub named_title: &'static str,
    pub for_title: &'static str,
    pub year: &'static str,
    pub categories: &'static str,
    pub category_separator: &'static str,
}

impl CatalogTables {
    /// The built-in DocPilot tables.
    pub const DEFAULT: Self = Self {
        intents: INTENT_PATTERNS,
        template_types: TEMPLATE_PATTERNS,
        brands: BRAND_PATTERNS,
        quoted_title: QUOTED_TITLE,
        named_title: NAMED_TITLE,
        for_title: FOR_TITLE,
        year: YEAR,
        categories: CATEGORIES,
        category_separator: CATEGORY_SEPARATOR,
    };
}

impl Default for CatalogTables {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An intent and the patterns that select it.
#[derive(Debug, Clone)]
pub(crate) struct IntentRule {
    pub intent: Intent,
    pub patterns: Vec<Regex>,
}

/// A keyword-table entry: the value produced and the patterns that select it.
#[derive(Debug, Clone)]
pub(crate) struct KeywordRule {
    pub value: &'static str,
    pub patterns: Vec<Regex>,
}

/// Compiled single-field extraction patterns.
#[derive(Debug, Clone)]
pub(crate) struct FieldPatterns {
    pub quoted_title: Regex,
    pub named_title: Regex,
    pub for_title: Regex,
    pub year: Regex,
    pub categories: Regex,
    pub category_separator: Regex,
}

/// Compiled, immutable pattern catalog.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    pub(crate) intents: Vec<IntentRule>,
    pub(crate) template_types: Vec<KeywordRule>,
    pub(crate) brands: Vec<KeywordRule>,
    pub(crate) fields: FieldPatterns,
}

impl PatternCatalog {
    /// Compile the built-in tables.
    pub fn compile() -> IntentResult<Self> {
        Self::from_tables(&CatalogTables::DEFAULT)
    }

    /// Compile an arbitrary set of tables, failing on the first bad pattern.
    pub fn from_tables(tables: &CatalogTables) -> IntentResult<Self> {
        let intents = tables
            .intents
            .iter()
            .map(|(intent, patterns)| {
                Ok(IntentRule {
                    intent: *intent,
                    patterns: compile_all(patterns)?,
                })
            })
            .collect::<IntentResult<Vec<_>>>()?;

        let catalog = Self {
            intents,
            template_types: compile_keywords(tables.template_types)?,
            brands: compile_keywords(tables.brands)?,
            fields: FieldPatterns {
                quoted_title: compile_capturing(tables.quoted_title)?,
                named_title: compile_capturing(tables.named_title)?,
                for_title: compile_capturing(tables.for_title)?,
                year: compile_capturing(tables.year)?,
                categories: compile_capturing(tables.categories)?,
                category_separator: compile(tables.category_separator)?,
            },
        };

        tracing::debug!(
            intent_groups = catalog.intents.len(),
            template_types = catalog.template_types.len(),
            brands = catalog.brands.len(),
            "pattern catalog compiled"
        );
        Ok(catalog)
    }

    /// Intents in the order they are tested.
    pub fn intent_order(&self) -> impl Iterator<Item = Intent> + '_ {
        self.intents.iter().map(|rule| rule.intent)
    }
}

fn compile(pattern: &str) -> IntentResult<Regex> {
    Regex::new(pattern).map_err(|source| IntentError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Compile a field pattern whose first group holds the extracted value.
fn compile_capturing(pattern: &str) -> IntentResult<Regex> {
    let regex = compile(pattern)?;
    if regex.captures_len() < 2 {
        return Err(IntentError::MissingCapture {
            pattern: pattern.to_string(),
        });
    }
    Ok(regex)
}

fn compile_all(patterns: &[&str]) -> IntentResult<Vec<Regex>> {
    patterns.iter().map(|p| compile(p)).collect()
}

fn compile_keywords(table: &[(&'static str, &[&str])]) -> IntentResult<Vec<KeywordRule>> {
    table
        .iter()
        .map(|(value, patterns)| {
            Ok(KeywordRule {
                value: *value,
                patterns: compile_all(patterns)?,
            })
        })
        .collect()
}
