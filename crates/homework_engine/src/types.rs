use std::fmt;

use homework_core::{FormatError, MalformedResponseError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FailureKind::InvalidUrl => write!(f, "Некорректный адрес API: {}", self.message),
            FailureKind::Network | FailureKind::Timeout => {
                write!(f, "Ошибка подключения к API ({}): {}", self.kind, self.message)
            }
            FailureKind::HttpStatus(code) => write!(f, "Неверный статус-код сервера: {code}"),
            FailureKind::Decode => {
                write!(f, "Ошибка преобразования ответа в JSON: {}", self.message)
            }
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
}

impl FailureKind {
    /// The request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, FailureKind::Network | FailureKind::Timeout)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "invalid json"),
        }
    }
}

/// Everything that can go wrong between issuing the fetch and having a
/// formatted status message.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Malformed(#[from] MalformedResponseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
