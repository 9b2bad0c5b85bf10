use integration_tests::harness::TestWatch;
use factolog_core::pipeline::StopReason;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test(flavor = "multi_thread")]
async fn join_then_kick_is_reflected_in_status_file() {
    // Arrange
    let watch = TestWatch::start(&["2023-01-01 10:00:00 [JOIN] alice joined the game"], None);
    watch.wait_for_status(|d| d.users.contains_key("alice")).await;

    // Act
    watch.append("2023-01-01 10:05:00 [KICK] alice was kicked by bob. Reason: spam.");
    watch
        .wait_for_status(|d| d.users["alice"].kicks.is_some())
        .await;

    // Assert
    let status = watch.status_json();
    assert_eq!(
        status["users"],
        json!({
            "alice": {
                "kicks": [["2023-01-01 10:05:00", "bob", "spam"]],
                "last_seen": "2023-01-01 10:05:00",
                "online": false
            }
        })
    );
    assert!(status["generated"].as_str().is_some());
    assert_eq!(watch.stop().await, StopReason::Interrupted);
}

#[tokio::test(flavor = "multi_thread")]
async fn chat_actor_is_recorded_without_delimiter() {
    // Arrange
    let watch = TestWatch::start(&["2023-01-01 09:00:00 [CHAT] carol: hello"], None);

    // Act
    let doc = watch.wait_for_status(|d| d.users.contains_key("carol")).await;

    // Assert
    assert_eq!(doc.users["carol"].last_chat.as_deref(), Some("hello"));
    assert!(!doc.users.contains_key("carol:"));
    watch.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn garbage_and_partial_lines_do_not_disturb_the_run() {
    // Arrange
    let watch = TestWatch::start(
        &[
            "2023-01-01 10:00:00 [WHISPER] alice psst",
            "not a log line at all",
            "2023-01-01 10:00:01 [KICK] alice was yeeted",
        ],
        None,
    );

    // Act
    watch.append("2023-01-01 10:00:02 [JOIN] bob joined the game");
    let doc = watch.wait_for_status(|d| d.users.contains_key("bob")).await;

    // Assert
    let names: Vec<_> = doc.users.keys().cloned().collect();
    assert_eq!(names, vec!["bob"]);
    watch.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn rotated_log_keeps_accumulating_state() {
    // Arrange
    let watch = TestWatch::start(&["2023-01-01 10:00:00 [JOIN] alice joined the game"], None);
    watch.wait_for_status(|d| d.users.contains_key("alice")).await;

    // Act: the old log is moved aside and the server starts a fresh one.
    std::fs::rename(watch.log_path(), watch.log_path().with_extension("log.1")).unwrap();
    std::fs::write(
        watch.log_path(),
        "2023-01-02 08:00:00 [JOIN] bob joined the game\n",
    )
    .unwrap();
    let doc = watch
        .wait_for_status(|d| d.users.contains_key("bob"))
        .await;

    // Assert: state is never dropped on rotation.
    assert!(doc.users.contains_key("alice"));
    watch.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn deleted_log_is_waited_for_instead_of_failing() {
    // Arrange
    let watch = TestWatch::start(&["2023-01-01 10:00:00 [JOIN] alice joined the game"], None);
    watch.wait_for_status(|d| d.users.contains_key("alice")).await;

    // Act
    std::fs::remove_file(watch.log_path()).unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    std::fs::write(
        watch.log_path(),
        "2023-01-01 10:10:00 [LEAVE] alice left the game\n",
    )
    .unwrap();
    let doc = watch
        .wait_for_status(|d| d.users["alice"].online == Some(false))
        .await;

    // Assert
    assert_eq!(
        doc.users["alice"].last_seen.map(|t| t.to_string()),
        Some("2023-01-01 10:10:00".to_string())
    );
    assert_eq!(watch.stop().await, StopReason::Interrupted);
}
