//! Wires the stages together.
//!
//! ```text
//! Tailer --(unbounded mpsc: raw lines)--> Driver: parse_line -> Aggregator::process
//!                                                                  |
//!                                    SnapshotPublisher <-- RosterReader (copy)
//! ```
//!
//! All activities observe one `Shutdown` flag. The tailer sets it on an
//! unrecoverable read failure, the signal listener on Ctrl-C / SIGTERM.

mod driver;
mod replay;
mod run;
mod shutdown;
mod signals;


pub use driver::{Driver, IngestStats};
pub use replay::replay;
pub use run::{run, run_until};
pub use shutdown::{Shutdown, StopReason};
pub use signals::listen_for_signals;
