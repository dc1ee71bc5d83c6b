use serde_json::Value;
use thiserror::Error;

use crate::{HomeworkRecord, Verdict};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Словарь ответа API не содержит ключа {0}")]
    MissingField(&'static str),
    #[error("Статус ответа не известен: {0}")]
    UnknownStatus(String),
}

/// Render the chat notification for a single homework record.
pub fn format_status(record: &HomeworkRecord) -> Result<String, FormatError> {
    let name = record
        .field("homework_name")
        .ok_or(FormatError::MissingField("homework_name"))?;
    let status = record
        .field("status")
        .ok_or(FormatError::MissingField("status"))?;

    let verdict = status
        .as_str()
        .and_then(Verdict::from_status)
        .ok_or_else(|| FormatError::UnknownStatus(plain_text(status)))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        plain_text(name),
        verdict.text()
    ))
}

// Strings are shown without JSON quotes; anything else in its JSON form.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
