use crate::grammar::{EventKind, GrammarError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("dropping {kind} event for {actor}: {source}")]
    Sanction {
        actor: String,
        kind: EventKind,
        #[source]
        source: GrammarError,
    },
}
