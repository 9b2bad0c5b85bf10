use crate::aggregate::{Roster, RosterReader, timestamp};
use crate::snapshot::SnapshotError;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// The document written on every snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDocument {
    /// UTC, `YYYY-MM-DD HH:MM:SS`.
    #[serde(with = "timestamp")]
    pub generated: NaiveDateTime,
    pub users: Roster,
}

impl StatusDocument {
    pub fn new(users: Roster, generated: NaiveDateTime) -> Self {
        Self { generated, users }
    }

    /// Stamp `users` with the current UTC time.
    pub fn now(users: Roster) -> Self {
        Self::new(users, Utc::now().naive_utc())
    }

    /// Copy the roster out of `reader` and stamp it.
    pub fn capture(reader: &RosterReader) -> Self {
        Self::now(reader.snapshot())
    }

    /// Four-space indented JSON with keys in sorted order.
    pub fn to_json(&self) -> Result<Vec<u8>, SnapshotError> {
        let mut out = Vec::new();
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        Ok(out)
    }
}

/// Serialize `doc` and atomically replace `path` with it.
pub fn write_snapshot(path: &Path, doc: &StatusDocument) -> Result<(), SnapshotError> {
    let bytes = doc.to_json()?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| SnapshotError::write(path, e))?;
    tmp.write_all(&bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| SnapshotError::write(path, e))?;
    tmp.persist(path)
        .map_err(|e| SnapshotError::write(path, e.error))?;

    Ok(())
}
