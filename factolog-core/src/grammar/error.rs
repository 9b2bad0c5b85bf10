use crate::grammar::EventKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("{kind} events carry no sanction detail")]
    NotASanction { kind: EventKind },

    #[error("malformed {kind} detail: {detail:?}")]
    MalformedSanction { kind: EventKind, detail: String },
}
