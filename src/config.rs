use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: Option<String>,
    pub chat_model: String,
    pub summarization_model: String,
    pub max_completion_tokens: u32,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            openai_api_base: env::var("OPENAI_API_BASE")
                .ok()
                .filter(|b| !b.trim().is_empty()),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            summarization_model: env::var("SUMMARIZATION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            max_completion_tokens: env::var("MAX_COMPLETION_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(800),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8001),
        }
    }

    /// Whether an inference backend can be constructed from this config.
    pub fn has_model_backend(&self) -> bool {
        self.openai_api_key.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: None,
            openai_api_base: None,
            chat_model: "test-model".to_string(),
            summarization_model: "test-model".to_string(),
            max_completion_tokens: 400,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8001,
        }
    }
}
