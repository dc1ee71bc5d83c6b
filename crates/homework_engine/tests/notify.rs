use homework_engine::{NotifyError, NotifySettings, Notifier, TelegramNotifier};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> NotifySettings {
    NotifySettings {
        api_base: server.uri(),
        ..NotifySettings::default()
    }
}

#[tokio::test]
async fn notifier_posts_text_to_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botbot-token/sendMessage"))
        .and(body_json(json!({"chat_id": "12345", "text": "привет"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(settings_for(&server), "bot-token", "12345").unwrap();
    notifier.notify("привет").await.expect("delivered");
}

#[tokio::test]
async fn notifier_surfaces_bot_api_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botbot-token/sendMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(settings_for(&server), "bot-token", "1").unwrap();
    let err = notifier.notify("hi").await.unwrap_err();

    assert_eq!(
        err,
        NotifyError::Rejected {
            status: 400,
            description: "Bad Request: chat not found".to_string(),
        }
    );
}

#[tokio::test]
async fn notifier_treats_unreadable_reply_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botbot-token/sendMessage"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(settings_for(&server), "bot-token", "1").unwrap();
    let err = notifier.notify("hi").await.unwrap_err();

    assert!(matches!(err, NotifyError::Rejected { status: 502, .. }));
}

#[tokio::test]
async fn transport_error_does_not_leak_bot_token() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let settings = NotifySettings {
        api_base: format!("http://127.0.0.1:{port}"),
        ..NotifySettings::default()
    };

    let notifier = TelegramNotifier::new(settings, "very-secret-token", "1").unwrap();
    let err = notifier.notify("hi").await.unwrap_err();

    assert!(matches!(err, NotifyError::Transport(_)));
    assert!(!err.to_string().contains("very-secret-token"));
}
