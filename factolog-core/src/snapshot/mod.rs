//! Periodic status snapshots.
//!
//! A snapshot is a copy of the roster plus the UTC time it was taken,
//! written as indented JSON. Files are replaced by rename, so readers see
//! either the previous document or the new one and never a partial write.

mod document;
mod error;
mod publisher;

#[cfg(test)]
mod tests;

pub use document::{StatusDocument, write_snapshot};
pub use error::SnapshotError;
pub use publisher::{DEFAULT_PERIOD, MIN_PERIOD, SnapshotPublisher};
