use homework_core::{format_status, validate_response, FormatError, HomeworkRecord, Verdict};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn record(value: Value) -> HomeworkRecord {
    let payload = json!({"homeworks": [value], "current_date": 0});
    validate_response(&payload).unwrap().remove(0)
}

#[test]
fn approved_record_matches_expected_text() {
    let message = format_status(&record(json!({"homework_name": "hw1", "status": "approved"})));
    assert_eq!(
        message.unwrap(),
        "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn every_known_status_includes_name_and_verdict() {
    for verdict in Verdict::ALL {
        let message = format_status(&record(json!({
            "homework_name": "user__project.zip",
            "status": verdict.status(),
            "reviewer_comment": "ok"
        })))
        .unwrap();
        assert!(message.contains("\"user__project.zip\""), "{message}");
        assert!(message.ends_with(verdict.text()), "{message}");
    }
}

#[test]
fn unknown_status_is_rejected() {
    let err = format_status(&record(json!({"homework_name": "hw1", "status": "lost"})));
    assert_eq!(err, Err(FormatError::UnknownStatus("lost".to_string())));

    let err = format_status(&record(json!({"homework_name": "hw1", "status": 7})));
    assert_eq!(err, Err(FormatError::UnknownStatus("7".to_string())));
}

#[test]
fn missing_fields_are_reported_by_name() {
    assert_eq!(
        format_status(&record(json!({"status": "approved"}))),
        Err(FormatError::MissingField("homework_name"))
    );
    assert_eq!(
        format_status(&record(json!({"homework_name": "hw1", "status": null}))),
        Err(FormatError::MissingField("status"))
    );
    assert_eq!(
        format_status(&HomeworkRecord::default()),
        Err(FormatError::MissingField("homework_name"))
    );
}

#[test]
fn error_text_is_readable_in_chat() {
    assert_eq!(
        FormatError::MissingField("status").to_string(),
        "Словарь ответа API не содержит ключа status"
    );
}
