use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Ctrl-C / SIGTERM.
    Interrupted,
    /// The tailer hit an unrecoverable read failure.
    TailerStopped,
}

/// Set-once termination flag shared by every pipeline activity.
///
/// The first `trigger` wins; later calls keep the original reason.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<Option<StopReason>>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn trigger(&self, reason: StopReason) {
        let first = self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        });

        if first {
            tracing::info!(?reason, "shutdown requested");
        }
    }

    pub fn reason(&self) -> Option<StopReason> {
        *self.tx.borrow()
    }

    pub fn is_triggered(&self) -> bool {
        self.reason().is_some()
    }

    /// Resolves once the flag is set.
    pub async fn wait(&self) -> StopReason {
        let mut rx = self.tx.subscribe();
        // `self` owns the sender, so the channel cannot close under us.
        match rx.wait_for(Option::is_some).await {
            Ok(reason) => (*reason).unwrap_or(StopReason::Interrupted),
            Err(_) => StopReason::Interrupted,
        }
    }

    /// Sleep for `period`, returning early (with `false`) if shutdown fires.
    pub async fn sleep(&self, period: std::time::Duration) -> bool {
        tokio::select! {
            _ = tokio::time::sleep(period) => true,
            _ = self.wait() => false,
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
