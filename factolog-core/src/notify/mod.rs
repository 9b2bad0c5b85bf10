//! Outbound notifications.
//!
//! The aggregator decides *what* to say; a `Notifier` decides how it leaves
//! the process. Delivery is best effort: `notify` never blocks on the
//! network and never reports failure back to the caller.

mod error;
mod webhook;

#[cfg(test)]
mod tests;

pub use error::NotifyError;
pub use webhook::{DEFAULT_BOT_NAME, Notification, WebhookNotifier};

pub trait Notifier: Send + Sync {
    fn notify(&self, content: String);
}
