use std::fmt;

use bot_logging::bot_warn;
use thiserror::Error;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the process environment, after loading an
    /// optional `.env` file from the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Values are trimmed; empty or whitespace-only values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut read = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let credentials = Self {
            practicum_token: read(PRACTICUM_TOKEN),
            telegram_token: read(TELEGRAM_TOKEN),
            telegram_chat_id: read(TELEGRAM_CHAT_ID),
        };

        if missing.is_empty() {
            Ok(credentials)
        } else {
            Err(ConfigError::MissingVariables(missing))
        }
    }
}

fn load_dotenv() {
    report_dotenv(dotenvy::dotenv());
}

// A missing .env file is fine; the variables may be exported directly.
// Returns whether a problem worth the operator's attention was logged.
fn report_dotenv<T>(loaded: Result<T, dotenvy::Error>) -> bool {
    match loaded {
        Err(err) if !err.not_found() => {
            bot_warn!("Ignoring unreadable .env file: {}", err);
            true
        }
        _ => false,
    }
}
