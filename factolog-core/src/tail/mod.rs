//! Follow a growing log file.
//!
//! The tailer polls the file's metadata, reads whatever was appended since
//! the last offset and forwards complete lines over a channel. It survives
//! the file going missing for a while, truncation, and replacement by a new
//! file (log rotation). Anything else is unrecoverable: the shared shutdown
//! flag is set and the tailer returns.

mod error;
mod lines;
mod tailer;


pub use error::TailError;
pub use lines::LineBuffer;
pub use tailer::{DEFAULT_POLL_INTERVAL, Tailer};
