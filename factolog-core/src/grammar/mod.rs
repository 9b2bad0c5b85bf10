//! Line grammar for the server console log.
//!
//! Every event line has the shape
//!
//! ```text
//! <date> <time> [ACTION] <actor> <free text>
//! ```
//!
//! `parse_line` classifies the line and pulls out the timestamp, kind and
//! actor. Lines that do not fit the shape are not events and yield `None`;
//! the tailer can hand us half-written lines and those must never be fatal.
//!
//! Kicks and bans carry a second layer of structure in the free text (who
//! issued the sanction and why). That is decoded separately by
//! `parse_sanction`, so a corrupt detail can be reported against a line we
//! already know is a KICK or BAN.

mod error;
mod parse;
mod patterns;
mod types;

#[cfg(test)]
mod tests;

pub use error::GrammarError;
pub use parse::{parse_line, parse_sanction};
pub use types::{EventKind, ParsedEvent, Sanction, TIMESTAMP_FORMAT};
