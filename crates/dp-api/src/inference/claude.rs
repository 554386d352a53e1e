//! Claude resolver — Anthropic Messages API with tool use.
//!
//! The model sees one tool per dashboard intent and either selects a tool
//! (mapped onto a `ParsedRequest` with a navigate action) or answers in
//! prose (mapped onto the `conversation` pseudo-intent).

use std::fmt;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::time::timeout;

use dp_intent::action::{DEFAULT_THEME, routes};
use dp_intent::synthesize;
use dp_protocol::{ActionDescriptor, Intent, ParameterSet, ParsedRequest};

use super::{IntentResolver, Resolution, ResolveError};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Confidence reported for any tool selection.
const TOOL_CONFIDENCE: f64 = 0.95;
/// Confidence reported for a prose answer.
const CONVERSATION_CONFIDENCE: f64 = 1.0;

const DEFAULT_PDF_OPERATION: &str = "merge";

/// Tool name → intent. Anything else resolves to `Intent::Unknown`.
const TOOL_INTENTS: &[(&str, Intent)] = &[
    ("create_document", Intent::CreateDocument),
    ("create_spreadsheet", Intent::CreateSpreadsheet),
    ("create_presentation", Intent::CreatePresentation),
    ("process_pdf", Intent::ProcessPdf),
    ("apply_theme", Intent::ApplyTheme),
    ("polish_document", Intent::PolishDocument),
    ("get_help", Intent::GetHelp),
];

/// Configuration for the Claude resolver.
#[derive(Clone, Deserialize)]
pub struct ClaudeConfig {
    #[serde(default)]
    pub api_key: String,
    /// API base URL; `/v1/messages` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.anthropic.com".into()
}
fn default_model() -> String {
    "claude-sonnet-4-5-20250929".into()
}
fn default_max_tokens() -> u32 {
    1024
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for ClaudeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for ClaudeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClaudeConfig {
    /// Load configuration from environment variables.
    /// Returns `None` when `ANTHROPIC_API_KEY` is unset or blank.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = var("ANTHROPIC_API_KEY").filter(|key| !key.trim().is_empty())?;
        let defaults = Self::default();

        Some(Self {
            api_key,
            base_url: var("ANTHROPIC_BASE_URL").unwrap_or(defaults.base_url),
            model: var("CLAUDE_MODEL").unwrap_or(defaults.model),
            max_tokens: var("CLAUDE_MAX_TOKENS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_tokens),
            timeout_secs: var("CLAUDE_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
        })
    }
}

/// Messages API request body.
#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: String,
    messages: [UserMessage<'a>; 1],
    tools: &'a Value,
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API response (only fields we need).
#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        name: String,
        #[serde(default)]
        input: Value,
    },
    #[serde(other)]
    Other,
}

/// Resolver backed by the Anthropic Messages API.
pub struct ClaudeResolver {
    client: reqwest::Client,
    config: ClaudeConfig,
    tools: Value,
}

impl ClaudeResolver {
    pub fn new(config: ClaudeConfig) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ResolveError::Upstream(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            config,
            tools: tool_definitions(),
        })
    }

    /// Send one Messages API call and decode the response body.
    async fn call_messages(&self, message: &str, context: &str) -> anyhow::Result<MessagesResponse> {
        let url = format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'));

        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system: system_prompt(context),
            messages: [UserMessage {
                role: "user",
                content: message,
            }],
            tools: &self.tools,
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .context("anthropic request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("anthropic returned {status}: {detail}");
        }

        response
            .json()
            .await
            .context("failed to decode anthropic response")
    }
}

#[async_trait]
impl IntentResolver for ClaudeResolver {
    async fn resolve(&self, message: &str, context: &str) -> Result<Resolution, ResolveError> {
        let limit = Duration::from_secs(self.config.timeout_secs);

        match timeout(limit, self.call_messages(message, context)).await {
            Ok(Ok(response)) => {
                let parsed = interpret(response.content);
                tracing::debug!(
                    intent = %parsed.intent,
                    confidence = parsed.confidence,
                    context,
                    "claude resolution"
                );
                Ok(Resolution {
                    parsed,
                    tier: self.tier_name().into(),
                })
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "claude inference failed");
                Err(ResolveError::Upstream(format!("{e:#}")))
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.timeout_secs,
                    "claude inference timed out"
                );
                Err(ResolveError::Upstream(format!(
                    "timed out after {}s",
                    self.config.timeout_secs
                )))
            }
        }
    }

    fn tier_name(&self) -> &str {
        "claude"
    }
}

fn system_prompt(context: &str) -> String {
    format!(
        "You are the assistant for DocPilot, a document platform with dashboards for \
         Word documents, Excel spreadsheets, PowerPoint presentations, PDF tools, themes \
         and brand polishing. The user is currently on the \"{context}\" page.\n\n\
         When the request maps to one of the available tools, call exactly one tool with \
         the parameters you can infer. Otherwise answer briefly in plain text."
    )
}

/// Tool schema offered to the model, one tool per dashboard intent.
fn tool_definitions() -> Value {
    json!([
        {
            "name": "create_document",
            "description": "Create a Word document such as a report, memo or letter.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "template_type": {"type": "string", "enum": ["blank", "report", "memo", "letter"]},
                    "title": {"type": "string"}
                },
                "required": ["template_type"]
            }
        },
        {
            "name": "create_spreadsheet",
            "description": "Create an Excel spreadsheet such as a budget or financial model.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "template_type": {"type": "string", "enum": ["blank", "budget", "financial-model"]},
                    "year": {"type": "string"},
                    "categories": {"type": "array", "items": {"type": "string"}}
                },
                "required": ["template_type"]
            }
        },
        {
            "name": "create_presentation",
            "description": "Create a PowerPoint presentation or pitch deck.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "template_type": {"type": "string", "enum": ["blank", "business", "pitch"]},
                    "title": {"type": "string"}
                },
                "required": ["template_type"]
            }
        },
        {
            "name": "process_pdf",
            "description": "Merge, split, extract pages from, or rotate PDF files.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "operation": {"type": "string", "enum": ["merge", "split", "extract", "rotate"]}
                },
                "required": ["operation"]
            }
        },
        {
            "name": "apply_theme",
            "description": "Apply a color theme to a document.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "theme_id": {"type": "string"}
                }
            }
        },
        {
            "name": "polish_document",
            "description": "Restyle a document to match a well-known brand.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "brand": {
                        "type": "string",
                        "enum": ["mckinsey", "deloitte", "kpmg", "economist", "stripe",
                                 "apple", "ibm", "notion", "linear", "figma"]
                    }
                }
            }
        },
        {
            "name": "get_help",
            "description": "Explain what the platform can do.",
            "input_schema": {"type": "object", "properties": {}}
        }
    ])
}

/// Map the model's content blocks onto a `ParsedRequest`.
///
/// The last text block becomes the suggestion; the first tool call decides
/// the intent.
fn interpret(content: Vec<ContentBlock>) -> ParsedRequest {
    let mut text = None;
    let mut tool_call = None;

    for block in content {
        match block {
            ContentBlock::Text { text: t } => text = Some(t),
            ContentBlock::ToolUse { name, input } if tool_call.is_none() => {
                tool_call = Some((name, input))
            }
            ContentBlock::ToolUse { .. } | ContentBlock::Other => {}
        }
    }
    let text = text.filter(|t| !t.trim().is_empty());

    let Some((name, input)) = tool_call else {
        return ParsedRequest {
            intent: Intent::Conversation,
            parameters: ParameterSet::default(),
            confidence: CONVERSATION_CONFIDENCE,
            suggestion: text.unwrap_or_default(),
            action: None,
        };
    };

    let intent = TOOL_INTENTS
        .iter()
        .find(|(tool, _)| *tool == name)
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::Unknown);
    if intent == Intent::Unknown {
        tracing::warn!(tool_name = %name, "claude selected an unknown tool");
    }

    let parameters = project(&input);
    let action = match intent {
        Intent::ProcessPdf => Some(navigate(
            routes::PDF,
            json!({ "operation": str_field(&input, "operation").unwrap_or(DEFAULT_PDF_OPERATION) }),
        )),
        Intent::ApplyTheme => Some(navigate(
            routes::THEMES,
            json!({ "theme": str_field(&input, "theme_id").unwrap_or(DEFAULT_THEME) }),
        )),
        other => synthesize(other, &parameters),
    };

    ParsedRequest {
        suggestion: text.unwrap_or_else(|| tool_suggestion(intent, &input)),
        intent,
        parameters,
        confidence: TOOL_CONFIDENCE,
        action,
    }
}

/// Project tool input onto the shared parameter set.
fn project(input: &Value) -> ParameterSet {
    let year = match input.get("year") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };

    let categories = input
        .get("categories")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .filter(|items| !items.is_empty());

    ParameterSet {
        title: str_field(input, "title").map(String::from),
        template_type: str_field(input, "template_type").map(String::from),
        brand: str_field(input, "brand").map(String::from),
        year,
        categories,
    }
}

fn str_field<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    input
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Fallback suggestion when the model called a tool without saying anything.
fn tool_suggestion(intent: Intent, input: &Value) -> String {
    let template = str_field(input, "template_type");
    match intent {
        Intent::CreateDocument => {
            format!("I'll help you create a {}", template.unwrap_or("document"))
        }
        Intent::CreateSpreadsheet => {
            format!("I'll create a {} for you", template.unwrap_or("spreadsheet"))
        }
        Intent::CreatePresentation => {
            format!("I'll set up a {}", template.unwrap_or("presentation"))
        }
        Intent::ProcessPdf => format!(
            "I'll help you {} PDF files",
            str_field(input, "operation").unwrap_or("process")
        ),
        Intent::ApplyTheme => format!(
            "I'll apply the {}",
            str_field(input, "theme_id").unwrap_or("theme")
        ),
        Intent::PolishDocument => format!(
            "I'll apply {} brand styling",
            str_field(input, "brand").unwrap_or("professional")
        ),
        _ => "Let me help you with that".into(),
    }
}

fn navigate(target: &str, pre_fill: Value) -> ActionDescriptor {
    ActionDescriptor::Navigate {
        target: target.into(),
        pre_fill,
    }
}
