use std::time::Duration;

use bot_logging::bot_info;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct NotifySettings {
    pub api_base: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("Ошибка отправки сообщения в телеграм: {0}")]
    Transport(String),
    #[error("Телеграм отклонил сообщение (HTTP {status}): {description}")]
    Rejected { status: u16, description: String },
}

/// Delivers a text message to the configured chat. Implementations make a
/// single attempt; retrying is up to the caller.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotReply {
    ok: bool,
    description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    send_message_url: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(
        settings: NotifySettings,
        bot_token: &str,
        chat_id: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| NotifyError::Transport(err.to_string()))?;

        Ok(Self {
            send_message_url: format!(
                "{}/bot{}/sendMessage",
                settings.api_base.trim_end_matches('/'),
                bot_token
            ),
            chat_id: chat_id.into(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let body = serde_json::to_vec(&SendMessage {
            chat_id: &self.chat_id,
            text,
        })
        .map_err(|err| NotifyError::Transport(err.to_string()))?;

        let response = self
            .client
            .post(&self.send_message_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let raw = response.text().await.map_err(map_reqwest_error)?;

        match serde_json::from_str::<BotReply>(&raw) {
            Ok(reply) if reply.ok && status.is_success() => {
                bot_info!("Message delivered to chat {}", self.chat_id);
                Ok(())
            }
            Ok(reply) => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: reply.description.unwrap_or_else(|| status.to_string()),
            }),
            Err(_) if status.is_success() => Err(NotifyError::Transport(format!(
                "unexpected reply from bot API: {raw}"
            ))),
            Err(_) => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: status.to_string(),
            }),
        }
    }
}

// The request URL embeds the bot token, keep it out of error text.
fn map_reqwest_error(err: reqwest::Error) -> NotifyError {
    NotifyError::Transport(err.without_url().to_string())
}
