use crate::notify::{Notifier, NotifyError};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use url::Url;

pub const DEFAULT_BOT_NAME: &str = "FactoBot";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of one webhook request.
#[derive(Debug, Serialize)]
pub struct Notification<'a> {
    pub content: &'a str,
    pub username: &'a str,
}

/// Posts notifications to an HTTP webhook from a background task.
///
/// `notify` only enqueues. The worker exits once every clone of the
/// notifier has been dropped and the queue is drained.
pub struct WebhookNotifier {
    tx: mpsc::UnboundedSender<String>,
}

impl WebhookNotifier {
    /// Start the delivery worker on the current Tokio runtime.
    pub fn spawn(url: Url, username: String) -> Result<(Self, JoinHandle<()>), NotifyError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        tracing::info!(
            endpoint = %redacted(&url),
            username = %username,
            "webhook notifications enabled"
        );

        let handle = tokio::spawn(deliver(client, url, username, rx));
        Ok((Self { tx }, handle))
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, content: String) {
        if self.tx.send(content).is_err() {
            tracing::warn!("notification worker has stopped; message dropped");
        }
    }
}

async fn deliver(
    client: Client,
    url: Url,
    username: String,
    mut rx: mpsc::UnboundedReceiver<String>,
) {
    while let Some(content) = rx.recv().await {
        let body = Notification {
            content: &content,
            username: &username,
        };

        match client.post(url.clone()).json(&body).send().await {
            Ok(resp) if resp.status().is_success() => {
                tracing::debug!(status = %resp.status(), "notification delivered");
            }
            Ok(resp) => {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                tracing::warn!(%status, body = %text, "webhook rejected notification");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to deliver notification");
            }
        }
    }

    tracing::debug!("notification worker stopped");
}

// Webhook URLs embed their secret token in the path.
pub(crate) fn redacted(url: &Url) -> String {
    format!("{}://{}/…", url.scheme(), url.host_str().unwrap_or("?"))
}
