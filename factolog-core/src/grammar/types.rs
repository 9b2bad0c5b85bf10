use chrono::NaiveDateTime;
use std::fmt;

/// Format of the timestamp prefix on every log line. Also used when the
/// timestamp is written back out into snapshots.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Join,
    Leave,
    Kick,
    Ban,
    Command,
    Chat,
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "JOIN" => Some(Self::Join),
            "LEAVE" => Some(Self::Leave),
            "KICK" => Some(Self::Kick),
            "BAN" => Some(Self::Ban),
            "COMMAND" => Some(Self::Command),
            "CHAT" => Some(Self::Chat),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Join => "JOIN",
            Self::Leave => "LEAVE",
            Self::Kick => "KICK",
            Self::Ban => "BAN",
            Self::Command => "COMMAND",
            Self::Chat => "CHAT",
        }
    }

    /// Whether the actor is connected after an event of this kind.
    pub fn leaves_online(self) -> bool {
        !matches!(self, Self::Leave | Self::Kick | Self::Ban)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One recognized log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub timestamp: NaiveDateTime,
    pub kind: EventKind,
    /// Actor key. For CHAT lines the trailing `:` is already stripped.
    pub actor: String,
    /// Free text after the actor; meaning depends on `kind`.
    pub detail: String,
}

/// Issuer and reason decoded from a KICK or BAN detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanction {
    pub issuer: String,
    /// `None` when the log says the reason was `unspecified`.
    pub reason: Option<String>,
}
