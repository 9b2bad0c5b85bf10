use crate::notify::webhook::redacted;
use crate::notify::{Notification, Notifier, WebhookNotifier};
use pretty_assertions::assert_eq;
use url::Url;

#[test]
fn notification_serializes_as_discord_payload() {
    // Arrange
    let body = Notification {
        content: "alice has logged in",
        username: "FactoBot",
    };

    // Act
    let json = serde_json::to_value(&body).unwrap();

    // Assert
    assert_eq!(
        json,
        serde_json::json!({ "content": "alice has logged in", "username": "FactoBot" })
    );
}

#[test]
fn redacted_endpoint_hides_path() {
    // Arrange
    let url = Url::parse("https://discord.example/api/webhooks/123/secret-token").unwrap();

    // Act
    let shown = redacted(&url);

    // Assert
    assert_eq!(shown, "https://discord.example/…");
}

#[tokio::test]
async fn unreachable_endpoint_does_not_fail_notify() {
    // Arrange
    let url = Url::parse("http://127.0.0.1:9/hook").unwrap();
    let (notifier, handle) = WebhookNotifier::spawn(url, "FactoBot".to_string()).unwrap();

    // Act
    notifier.notify("alice has logged in".to_string());
    drop(notifier);

    // Assert: worker drains the queue, logs the failure and exits.
    tokio::time::timeout(std::time::Duration::from_secs(15), handle)
        .await
        .expect("worker should stop once the notifier is dropped")
        .unwrap();
}
