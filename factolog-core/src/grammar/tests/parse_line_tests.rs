use crate::grammar::{EventKind, ParsedEvent, parse_line};
use chrono::NaiveDateTime;
use pretty_assertions::assert_eq;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn parses_join_line() {
    // Act
    let event = parse_line("2023-01-01 10:00:00 [JOIN] alice joined the game");

    // Assert
    assert_eq!(
        event,
        Some(ParsedEvent {
            timestamp: ts("2023-01-01 10:00:00"),
            kind: EventKind::Join,
            actor: "alice".to_string(),
            detail: "joined the game".to_string(),
        })
    );
}

#[test]
fn recognizes_every_action_tag() {
    let cases = [
        ("JOIN", EventKind::Join),
        ("LEAVE", EventKind::Leave),
        ("KICK", EventKind::Kick),
        ("BAN", EventKind::Ban),
        ("COMMAND", EventKind::Command),
        ("CHAT", EventKind::Chat),
    ];

    for (tag, kind) in cases {
        let line = format!("2023-01-01 10:00:00 [{tag}] alice something");
        let event = parse_line(&line).unwrap_or_else(|| panic!("{tag} should parse"));
        assert_eq!(event.kind, kind);
        assert_eq!(event.actor, "alice");
    }
}

#[test]
fn strips_trailing_newline_and_carriage_return() {
    // Act
    let event = parse_line("2023-01-01 10:00:00 [COMMAND] bob /time\r\n").unwrap();

    // Assert
    assert_eq!(event.detail, "/time");
}

#[test]
fn chat_actor_has_delimiter_stripped() {
    // Act
    let event = parse_line("2023-01-01 09:00:00 [CHAT] carol: hello").unwrap();

    // Assert
    assert_eq!(event.kind, EventKind::Chat);
    assert_eq!(event.actor, "carol");
    assert_eq!(event.detail, "hello");
}

#[test]
fn non_chat_actor_keeps_trailing_colon() {
    // Act
    let event = parse_line("2023-01-01 09:00:00 [JOIN] dave: joined").unwrap();

    // Assert
    assert_eq!(event.actor, "dave:");
}

#[test]
fn unknown_action_tag_is_not_an_event() {
    assert_eq!(parse_line("2023-01-01 10:00:00 [WHISPER] alice psst"), None);
}

#[test]
fn missing_timestamp_is_not_an_event() {
    assert_eq!(parse_line("[JOIN] alice joined the game"), None);
    assert_eq!(parse_line("10:00:00 [JOIN] alice joined the game"), None);
}

#[test]
fn impossible_calendar_date_is_not_an_event() {
    assert_eq!(parse_line("2023-13-45 10:00:00 [JOIN] alice joined"), None);
}

#[test]
fn unpadded_timestamp_is_normalized() {
    // Act
    let event = parse_line("2023-1-1 9:05:00 [JOIN] alice joined").unwrap();

    // Assert
    assert_eq!(event.timestamp, ts("2023-01-01 09:05:00"));
    assert_eq!(
        event.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        "2023-01-01 09:05:00"
    );
}

#[test]
fn partial_line_is_not_an_event() {
    assert_eq!(parse_line("2023-01-01 10:00:00 [JO"), None);
    assert_eq!(parse_line("2023-01-01 10:00:00 [JOIN] alice"), None);
    assert_eq!(parse_line(""), None);
}

#[test]
fn leading_noise_is_not_an_event() {
    assert_eq!(
        parse_line("  0.000 2023-01-01 10:00:00 [JOIN] alice joined"),
        None
    );
}

#[test]
fn detail_keeps_inner_whitespace() {
    // Act
    let event = parse_line("2023-01-01 10:00:00 [CHAT] erin: a   b  c").unwrap();

    // Assert
    assert_eq!(event.detail, "a   b  c");
}
