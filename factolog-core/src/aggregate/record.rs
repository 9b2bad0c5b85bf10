use crate::grammar::{Sanction, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Actor name -> record. Ordered so serialized snapshots are stable.
pub type Roster = BTreeMap<String, ActorRecord>;

/// Latest known facts about one actor.
///
/// Every field starts out absent and only appears once an event sets it.
/// Fields are declared in alphabetical order, which is the key order of the
/// serialized snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bans: Option<Vec<SanctionEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kicks: Option<Vec<SanctionEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_chat: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    pub last_seen: Option<NaiveDateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<bool>,
}

impl ActorRecord {
    pub(crate) fn mark_seen(&mut self, online: bool, at: NaiveDateTime) {
        self.online = Some(online);
        self.last_seen = Some(at);
    }

    pub(crate) fn push_kick(&mut self, entry: SanctionEntry) {
        self.kicks.get_or_insert_with(Vec::new).push(entry);
    }

    pub(crate) fn push_ban(&mut self, entry: SanctionEntry) {
        self.bans.get_or_insert_with(Vec::new).push(entry);
    }
}

/// One kick or ban. Serialized as `[timestamp, issuer, reason]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SanctionRow", try_from = "SanctionRow")]
pub struct SanctionEntry {
    pub at: NaiveDateTime,
    pub issuer: String,
    pub reason: Option<String>,
}

impl SanctionEntry {
    pub fn new(at: NaiveDateTime, sanction: Sanction) -> Self {
        Self {
            at,
            issuer: sanction.issuer,
            reason: sanction.reason,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SanctionRow(String, String, Option<String>);

impl From<SanctionEntry> for SanctionRow {
    fn from(entry: SanctionEntry) -> Self {
        SanctionRow(
            entry.at.format(TIMESTAMP_FORMAT).to_string(),
            entry.issuer,
            entry.reason,
        )
    }
}

impl TryFrom<SanctionRow> for SanctionEntry {
    type Error = chrono::ParseError;

    fn try_from(row: SanctionRow) -> Result<Self, Self::Error> {
        Ok(SanctionEntry {
            at: NaiveDateTime::parse_from_str(&row.0, TIMESTAMP_FORMAT)?,
            issuer: row.1,
            reason: row.2,
        })
    }
}

/// Serde helpers for `YYYY-MM-DD HH:MM:SS` timestamps.
pub mod timestamp {
    use crate::grammar::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            ts: &Option<NaiveDateTime>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => super::serialize(ts, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapped(#[serde(with = "super")] NaiveDateTime);

            Ok(Option::<Wrapped>::deserialize(d)?.map(|Wrapped(ts)| ts))
        }
    }
}
