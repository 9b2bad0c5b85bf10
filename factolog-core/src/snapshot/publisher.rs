use crate::aggregate::RosterReader;
use crate::pipeline::Shutdown;
use crate::snapshot::{SnapshotError, StatusDocument, write_snapshot};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(10);

/// Shortest period the publisher will tick at.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Writes a `StatusDocument` to `path` on a fixed period.
pub struct SnapshotPublisher {
    reader: RosterReader,
    path: PathBuf,
    period: Duration,
}

impl SnapshotPublisher {
    pub fn new(reader: RosterReader, path: impl Into<PathBuf>, period: Duration) -> Self {
        Self {
            reader,
            path: path.into(),
            period: period.max(MIN_PERIOD),
        }
    }

    /// Tick until shutdown. The first tick fires immediately. Failed ticks
    /// are logged and the schedule carries on.
    pub async fn run(self, shutdown: Shutdown) {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            path = %self.path.display(),
            period_secs = self.period.as_secs_f64(),
            "snapshot publisher started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.wait() => break,
            }
            if shutdown.is_triggered() {
                break;
            }

            match self.publish_once().await {
                Ok(users) => {
                    tracing::debug!(path = %self.path.display(), users, "snapshot written");
                }
                Err(e) => {
                    tracing::error!(path = %self.path.display(), error = %e, "snapshot failed");
                }
            }
        }

        tracing::info!("snapshot publisher stopped");
    }

    /// Take one snapshot and write it. Returns the number of actors written.
    ///
    /// The roster lock is only held while copying; serialization and I/O
    /// run on the blocking pool.
    pub async fn publish_once(&self) -> Result<usize, SnapshotError> {
        let doc = StatusDocument::capture(&self.reader);
        let users = doc.users.len();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_snapshot(&path, &doc)).await??;
        Ok(users)
    }
}
