//! Configuration loaded from the environment (and `.env`, if present).

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

use crate::error::RunshotError;
use crate::prompt::PromptTemplate;

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default bind address for `runshot serve`.
pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 8501));

/// Runtime configuration.
///
/// Resolution order for each value: explicit setter > environment variable > default.
/// A missing API key is not an error here; the remote call reports it.
#[derive(Clone)]
pub struct RunshotConfig {
    api_key: Option<String>,
    base_url: String,
    addr: SocketAddr,
    prompt: PromptTemplate,
}

impl fmt::Debug for RunshotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunshotConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("base_url", &self.base_url)
            .field("addr", &self.addr)
            .field("prompt", &self.prompt)
            .finish()
    }
}

impl Default for RunshotConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RunshotConfig {
    /// Config with no credential and all defaults.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            addr: DEFAULT_ADDR,
            prompt: PromptTemplate::default(),
        }
    }

    /// Load from environment variables (GEMINI_API_KEY, GEMINI_BASE_URL, ...).
    pub fn from_env() -> Result<Self, RunshotError> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RunshotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(key) = lookup("GEMINI_API_KEY").or_else(|| lookup("GOOGLE_API_KEY")) {
            config.api_key = Some(key);
        }

        if let Some(url) = lookup("GEMINI_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(addr) = lookup("RUNSHOT_ADDR") {
            config.addr = addr.parse().map_err(|_| {
                RunshotError::Configuration(format!("Invalid RUNSHOT_ADDR '{addr}'"))
            })?;
        }

        if let Some(prompt) = lookup("RUNSHOT_PROMPT") {
            config.prompt = PromptTemplate::from_str(&prompt).map_err(|_| {
                RunshotError::Configuration(format!(
                    "Invalid RUNSHOT_PROMPT '{prompt}': expected 'detailed' or 'simplified'"
                ))
            })?;
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn prompt(&self) -> PromptTemplate {
        self.prompt
    }
}
