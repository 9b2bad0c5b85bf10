//! Per-actor state folded from parsed events.
//!
//! The `Aggregator` is the only writer of the roster. Everything else gets
//! a `RosterReader`, which hands out deep copies taken under the lock so a
//! reader never sees a half-applied event and never holds the lock while
//! it does I/O.

mod aggregator;
mod error;
mod messages;
mod record;

#[cfg(test)]
mod tests;

pub use aggregator::{Aggregator, RosterReader};
pub use error::ProcessError;
pub use record::{ActorRecord, Roster, SanctionEntry, timestamp};
