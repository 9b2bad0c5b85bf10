use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to build webhook client: {0}")]
    Client(#[from] reqwest::Error),
}
