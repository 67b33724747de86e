//! Project-wide constants.

/// Default OpenAI Responses endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/responses";

/// Default model when none is specified.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Environment variable consulted when no `--api-key` is given.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// The single origin allowed by CORS unless overridden.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Advisory text the model is told to return verbatim as `disclaimer`.
pub const DISCLAIMER: &str = "This analysis is generated by an AI model and is for informational purposes only. \
Review it with qualified professionals before acting on it.";

/// Body message for every failure that is not the caller's fault.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!DEFAULT_API_URL.is_empty());
        assert!(!DEFAULT_MODEL.is_empty());
        assert!(!DISCLAIMER.is_empty());
        assert!(!GENERIC_ERROR_MESSAGE.is_empty());
    }

    #[test]
    fn default_bind_is_a_socket_addr() {
        assert!(DEFAULT_BIND.parse::<std::net::SocketAddr>().is_ok());
    }

    #[test]
    fn api_url_uses_https() {
        assert!(DEFAULT_API_URL.starts_with("https://"));
    }
}
