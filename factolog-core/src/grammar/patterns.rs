use once_cell::sync::Lazy;
use regex::Regex;

// <date> <time> [ACTION] <actor> <free text>
pub(crate) static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<date>\d+-\d+-\d+)\s+(?P<time>\d+:\d+:\d+)\s+\[(?P<action>JOIN|LEAVE|KICK|BAN|COMMAND|CHAT)\]\s+(?P<actor>\S+)\s+(?P<detail>.*)",
    )
    .expect("entry pattern")
});

// `unspecified` is tried first so it never lands in the reason group.
pub(crate) static KICK_DETAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^was kicked by (?P<issuer>[^.\s]+)\. Reason: (?:unspecified|(?P<reason>.*))\.")
        .expect("kick pattern")
});

pub(crate) static BAN_DETAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^was banned by (?P<issuer>[^.\s]+)\. Reason: (?:unspecified|(?P<reason>.*))\.")
        .expect("ban pattern")
});

pub(crate) const CHAT_DELIMITER: char = ':';
