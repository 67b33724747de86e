//! Runtime settings, parsed from the command line.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;

use crate::consts::{
    API_KEY_ENV, DEFAULT_ALLOWED_ORIGIN, DEFAULT_API_URL, DEFAULT_BIND,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "scenario-analyser", version, about = "Scenario analysis over an LLM completion API.")]
pub struct Settings {
    /// Address to listen on
    #[arg(short, long, default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Model identifier sent to the completion API
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Completion API endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API key (falls back to OPENAI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// The one browser origin allowed by CORS
    #[arg(long, default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,

    /// Prompt template file with [scenarios] and [constraints] placeholders
    #[arg(short, long)]
    pub prompt_file: Option<PathBuf>,

    /// Completion request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Completion connect timeout in seconds
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout: u64,
}

impl Settings {
    /// API key from the flag, else the environment.
    pub fn api_key(&self) -> Result<String> {
        resolve_api_key(self.api_key.as_deref(), std::env::var(API_KEY_ENV).ok())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}

fn resolve_api_key(flag: Option<&str>, env: Option<String>) -> Result<String> {
    if let Some(key) = flag
        && !key.is_empty()
    {
        return Ok(key.to_string());
    }
    match env {
        Some(key) if !key.is_empty() => Ok(key),
        _ => bail!(
            "no OpenAI API key found. Pass --api-key or set {}.",
            API_KEY_ENV
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        Settings::try_parse_from(std::iter::once("analyser").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let settings = parse(&[]);
        assert_eq!(settings.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.allowed_origin, "http://localhost:3000");
        assert!(settings.api_key.is_none());
        assert!(settings.prompt_file.is_none());
        assert_eq!(settings.timeout(), Duration::from_secs(60));
        assert_eq!(settings.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn overrides() {
        let settings = parse(&[
            "--bind",
            "0.0.0.0:9000",
            "--model",
            "gpt-4.1-mini",
            "--allowed-origin",
            "https://app.example.com",
            "--prompt-file",
            "/etc/analyser/prompt.txt",
            "--timeout",
            "5",
        ]);
        assert_eq!(settings.bind.port(), 9000);
        assert_eq!(settings.model, "gpt-4.1-mini");
        assert_eq!(settings.allowed_origin, "https://app.example.com");
        assert_eq!(
            settings.prompt_file,
            Some(PathBuf::from("/etc/analyser/prompt.txt"))
        );
        assert_eq!(settings.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_bind_address() {
        let result = Settings::try_parse_from(["analyser", "--bind", "not-an-addr"]);
        assert!(result.is_err());
    }

    #[test]
    fn api_key_flag_wins() {
        let key = resolve_api_key(Some("sk-flag"), Some("sk-env".to_string())).unwrap();
        assert_eq!(key, "sk-flag");
    }

    #[test]
    fn api_key_falls_back_to_env() {
        assert_eq!(resolve_api_key(None, Some("sk-env".to_string())).unwrap(), "sk-env");
        assert_eq!(resolve_api_key(Some(""), Some("sk-env".to_string())).unwrap(), "sk-env");
    }

    #[test]
    fn api_key_missing_is_error() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
        assert!(resolve_api_key(None, Some(String::new())).is_err());
    }

    #[test]
    fn settings_api_key_uses_flag() {
        let settings = parse(&["--api-key", "sk-test"]);
        assert_eq!(settings.api_key().unwrap(), "sk-test");
    }
}
