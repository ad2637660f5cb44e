use crate::error::AppError;
use std::env;

const DEFAULT_LOCALE: &str = "zh_TW";

#[derive(Debug, Clone)]
pub struct Config {
    pub bitly_token: Option<String>,
    pub locale: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bitly_token = env::var("BITLY_TOKEN").ok().filter(|t| !t.trim().is_empty());

        let locale = env::var("DDRAGON_LOCALE").unwrap_or_else(|_| DEFAULT_LOCALE.to_string());
        if locale.is_empty() || !locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::ConfigError(format!(
                "DDRAGON_LOCALE must look like zh_TW, got {:?}",
                locale
            )));
        }

        let user_agent = env::var("SCOREBOARD_USER_AGENT")
            .unwrap_or_else(|_| format!("match_scoreboard/{}", env!("CARGO_PKG_VERSION")));

        Ok(Config {
            bitly_token,
            locale,
            user_agent,
        })
    }

    /// CLI flags win over the environment.
    pub fn with_bitly_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.bitly_token = Some(token);
        }
        self
    }
}
