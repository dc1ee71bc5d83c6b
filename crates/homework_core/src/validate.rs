use serde_json::{Map, Value};
use thiserror::Error;

/// Structural problems in a decoded API payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedResponseError {
    #[error("Ответ API не содержит словаря с данными")]
    NotAMapping,
    #[error("Словарь ответа API не содержит ключей homeworks и/или current_date")]
    MissingKeys,
    #[error("Ключ homeworks в ответе API не содержит списка")]
    HomeworksNotSequence,
    #[error("Элемент {index} списка homeworks не является словарём")]
    RecordNotMapping { index: usize },
}

/// One entry of the `homeworks` list. Fields are kept as decoded; the
/// formatter decides which ones it needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeworkRecord {
    fields: Map<String, Value>,
}

impl HomeworkRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the field value, treating an explicit `null` as absent.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|value| !value.is_null())
    }
}

/// Check the payload shape and extract the homework records.
///
/// An empty `homeworks` list is the steady state between status changes and
/// yields an empty vector.
pub fn validate_response(payload: &Value) -> Result<Vec<HomeworkRecord>, MalformedResponseError> {
    let object = payload
        .as_object()
        .ok_or(MalformedResponseError::NotAMapping)?;

    let homeworks = present(object, "homeworks");
    if homeworks.is_none() || present(object, "current_date").is_none() {
        return Err(MalformedResponseError::MissingKeys);
    }

    let items = homeworks
        .and_then(Value::as_array)
        .ok_or(MalformedResponseError::HomeworksNotSequence)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_object()
                .cloned()
                .map(HomeworkRecord::new)
                .ok_or(MalformedResponseError::RecordNotMapping { index })
        })
        .collect()
}

fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}
