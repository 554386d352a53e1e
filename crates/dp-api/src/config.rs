//! AI router server configuration.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which resolver answers `/api/ai/parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolverMode {
    /// Rule engine only.
    Rules,
    /// Claude first, rule engine when Claude fails or finds nothing.
    Claude,
    /// Rule engine first, Claude when the rules find nothing.
    LocalFirst,
}

impl ResolverMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::Claude => "claude",
            Self::LocalFirst => "local-first",
        }
    }

    /// Whether this mode needs an Anthropic API key.
    pub fn uses_claude(&self) -> bool {
        !matches!(self, Self::Rules)
    }
}

impl fmt::Display for ResolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolverMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" => Ok(Self::Rules),
            "claude" => Ok(Self::Claude),
            "local-first" | "local_first" | "tiered" => Ok(Self::LocalFirst),
            other => Err(format!("unknown resolver mode: {other}")),
        }
    }
}

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins (e.g., ["http://localhost:5173"]). Empty allows any.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Explicit resolver mode (RESOLVER_MODE env var). `None` picks one from
    /// whether an API key is configured.
    #[serde(default)]
    pub resolver_mode: Option<ResolverMode>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, "invalid PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        let resolver_mode = var("RESOLVER_MODE").and_then(|raw| match raw.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring RESOLVER_MODE");
                None
            }
        });

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
            resolver_mode,
        }
    }

    /// Resolve the mode to run, given whether Claude credentials exist.
    pub fn effective_mode(&self, has_api_key: bool) -> ResolverMode {
        match self.resolver_mode {
            Some(mode) if mode.uses_claude() && !has_api_key => {
                tracing::warn!(
                    requested = %mode,
                    "ANTHROPIC_API_KEY not set, falling back to rule-based resolution"
                );
                ResolverMode::Rules
            }
            Some(mode) => mode,
            None if has_api_key => ResolverMode::Claude,
            None => ResolverMode::Rules,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            resolver_mode: None,
        }
    }
}
