use crate::aggregate::{ActorRecord, Roster, SanctionEntry};
use crate::snapshot::{StatusDocument, write_snapshot};
use chrono::NaiveDateTime;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn sample_roster() -> Roster {
    let mut users = Roster::new();
    users.insert(
        "alice".to_string(),
        ActorRecord {
            kicks: Some(vec![SanctionEntry {
                at: ts("2023-01-01 10:05:00"),
                issuer: "bob".to_string(),
                reason: Some("spam".to_string()),
            }]),
            last_seen: Some(ts("2023-01-01 10:05:00")),
            online: Some(false),
            ..ActorRecord::default()
        },
    );
    users.insert(
        "carol".to_string(),
        ActorRecord {
            last_chat: Some("hello".to_string()),
            last_seen: Some(ts("2023-01-01 09:00:00")),
            online: Some(true),
            ..ActorRecord::default()
        },
    );
    users
}

#[test]
fn renders_sorted_four_space_json_without_absent_fields() {
    // Arrange
    let doc = StatusDocument::new(sample_roster(), ts("2023-01-01 10:06:00"));

    // Act
    let json = String::from_utf8(doc.to_json().unwrap()).unwrap();

    // Assert
    let expected = r#"{
    "generated": "2023-01-01 10:06:00",
    "users": {
        "alice": {
            "kicks": [
                [
                    "2023-01-01 10:05:00",
                    "bob",
                    "spam"
                ]
            ],
            "last_seen": "2023-01-01 10:05:00",
            "online": false
        },
        "carol": {
            "last_chat": "hello",
            "last_seen": "2023-01-01 09:00:00",
            "online": true
        }
    }
}"#;
    assert_eq!(json, expected);
}

#[test]
fn unspecified_reason_serializes_as_null() {
    // Arrange
    let mut users = Roster::new();
    users.insert(
        "dave".to_string(),
        ActorRecord {
            bans: Some(vec![SanctionEntry {
                at: ts("2023-01-02 00:00:00"),
                issuer: "admin".to_string(),
                reason: None,
            }]),
            ..ActorRecord::default()
        },
    );
    let doc = StatusDocument::new(users, ts("2023-01-02 00:00:01"));

    // Act
    let value: serde_json::Value = serde_json::from_slice(&doc.to_json().unwrap()).unwrap();

    // Assert
    assert_eq!(
        value["users"]["dave"]["bans"],
        serde_json::json!([["2023-01-02 00:00:00", "admin", null]])
    );
}

#[test]
fn written_document_parses_back() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("status.json");
    let doc = StatusDocument::new(sample_roster(), ts("2023-01-01 10:06:00"));

    // Act
    write_snapshot(&path, &doc).unwrap();
    let parsed: StatusDocument = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    // Assert
    assert_eq!(parsed, doc);
}

#[test]
fn write_replaces_previous_content() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("status.json");
    fs::write(&path, "x".repeat(10_000)).unwrap();
    let doc = StatusDocument::new(Roster::new(), ts("2023-01-01 00:00:00"));

    // Act
    write_snapshot(&path, &doc).unwrap();

    // Assert
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "{\n    \"generated\": \"2023-01-01 00:00:00\",\n    \"users\": {}\n}"
    );
    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn write_into_missing_directory_fails() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("status.json");
    let doc = StatusDocument::new(Roster::new(), ts("2023-01-01 00:00:00"));

    // Act
    let result = write_snapshot(&path, &doc);

    // Assert
    assert!(matches!(result, Err(crate::snapshot::SnapshotError::Write { .. })));
}
