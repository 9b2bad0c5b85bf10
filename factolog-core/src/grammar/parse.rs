use crate::grammar::patterns::{BAN_DETAIL, CHAT_DELIMITER, ENTRY, KICK_DETAIL};
use crate::grammar::{EventKind, GrammarError, ParsedEvent, Sanction};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse one raw log line into an event.
///
/// Returns `None` for anything that is not an event line: unknown action
/// tags, a missing or impossible timestamp, or a partial line.
///
/// The timestamp is decoded into a `NaiveDateTime`, so it is written back
/// zero-padded (`2023-1-1` becomes `2023-01-01`). A line whose date or time
/// matches the pattern but is not a real calendar value is dropped.
pub fn parse_line(raw: &str) -> Option<ParsedEvent> {
    let line = raw.trim_end_matches(['\r', '\n']);
    let caps = ENTRY.captures(line)?;

    let timestamp = parse_timestamp(&caps["date"], &caps["time"])?;
    let kind = EventKind::from_tag(&caps["action"])?;

    let actor = &caps["actor"];
    let actor = match kind {
        EventKind::Chat => actor.strip_suffix(CHAT_DELIMITER).unwrap_or(actor),
        _ => actor,
    };

    Some(ParsedEvent {
        timestamp,
        kind,
        actor: actor.to_string(),
        detail: caps["detail"].to_string(),
    })
}

/// Decode the issuer and reason from a KICK or BAN detail.
pub fn parse_sanction(kind: EventKind, detail: &str) -> Result<Sanction, GrammarError> {
    let pattern = match kind {
        EventKind::Kick => &*KICK_DETAIL,
        EventKind::Ban => &*BAN_DETAIL,
        _ => return Err(GrammarError::NotASanction { kind }),
    };

    let caps = pattern
        .captures(detail)
        .ok_or_else(|| GrammarError::MalformedSanction {
            kind,
            detail: detail.to_string(),
        })?;

    Ok(Sanction {
        issuer: caps["issuer"].to_string(),
        reason: caps.name("reason").map(|m| m.as_str().to_string()),
    })
}

fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S").ok()?;
    Some(NaiveDateTime::new(date, time))
}
