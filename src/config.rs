//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATABASE_PATH: &str = "database.db";
pub const DEFAULT_CORS_ORIGIN: &str = "https://www.re-bom.shop";

/// Settings for the outbound chat-completion call.
#[derive(Clone)]
pub struct LlmConfig {
    /// Full chat-completion endpoint URL.
    pub api_url: String,
    /// Bearer token.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Prompt template with `{type_}`, `{emotion}` and `{voice_text}` placeholders.
    pub prompt_template: String,
    /// System instruction sent as the first message.
    pub purpose: String,
    /// Generation ceiling.
    pub max_tokens: u32,
    /// Timeout for a single round trip.
    pub timeout: Duration,
    /// Extra attempts after a transport failure.
    pub max_retries: u32,
}

impl LlmConfig {
    /// Mask the API key for safe display (keeps last 4 chars).
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 8 {
            "***".into()
        } else {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("***{}", tail)
        }
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.masked_api_key())
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: String,
    pub database_path: PathBuf,
    /// The single origin allowed by CORS, without a trailing slash.
    pub cors_origin: String,
    /// Directory for the rolling JSON log file; console only when unset.
    pub log_dir: Option<PathBuf>,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| anyhow!("Missing required environment variable {}", key))
        };

        let llm = LlmConfig {
            api_url: required("API_URL")?,
            api_key: required("API_KEY")?,
            model: required("API_MODEL")?,
            prompt_template: required("API_PROMPT")?,
            purpose: required("API_PURPOSE")?,
            max_tokens: parse_or("API_MAX_TOKENS", get("API_MAX_TOKENS"), 1000)?,
            timeout: Duration::from_secs(parse_or(
                "API_TIMEOUT_SECS",
                get("API_TIMEOUT_SECS"),
                60,
            )?),
            max_retries: parse_or("API_MAX_RETRIES", get("API_MAX_RETRIES"), 0)?,
        };

        let cors_origin = get("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            server_addr: get("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            database_path: get("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            cors_origin,
            log_dir: get("LOG_DIR").map(PathBuf::from),
            llm,
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, v)),
        None => Ok(default),
    }
}
