use factolog_core::conf::WatchConfig;
use factolog_core::pipeline::{Shutdown, StopReason, run_until};
use factolog_core::snapshot::StatusDocument;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use url::Url;

/// A watch pipeline running against a log file in a temp directory.
pub struct TestWatch {
    _dir: TempDir,
    log: PathBuf,
    status: PathBuf,
    shutdown: Shutdown,
    handle: JoinHandle<anyhow::Result<StopReason>>,
}

impl TestWatch {
    /// Seed the log with `initial` lines and start watching it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(initial: &[&str], webhook: Option<Url>) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let log = dir.path().join("console.log");
        let status = dir.path().join("status.json");

        let mut seed = String::new();
        for line in initial {
            seed.push_str(line);
            seed.push('\n');
        }
        fs::write(&log, seed).expect("failed to seed log");

        let config = WatchConfig {
            output_file: Some(status.clone()),
            frequency_secs: 0.05,
            poll_interval_ms: 10,
            webhook_url: webhook,
            ..WatchConfig::new(&log)
        };

        let shutdown = Shutdown::new();
        let handle = tokio::spawn(run_until(config, shutdown.clone()));

        Self {
            _dir: dir,
            log,
            status,
            shutdown,
            handle,
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log
    }

    pub fn append(&self, line: &str) {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.log)
            .expect("failed to open log");
        writeln!(file, "{line}").expect("failed to append to log");
    }

    /// Poll the status file until `ready` holds (or panic).
    pub async fn wait_for_status(&self, ready: impl Fn(&StatusDocument) -> bool) -> StatusDocument {
        for _ in 0..200 {
            let doc = fs::read_to_string(&self.status)
                .ok()
                .and_then(|text| serde_json::from_str::<StatusDocument>(&text).ok());
            if let Some(doc) = doc.filter(|d| ready(d)) {
                return doc;
            }
            sleep(Duration::from_millis(25)).await;
        }
        panic!("status file never reached the expected state");
    }

    /// Raw JSON of the status file as last written.
    pub fn status_json(&self) -> serde_json::Value {
        let text = fs::read_to_string(&self.status).expect("status file missing");
        serde_json::from_str(&text).expect("status file is not JSON")
    }

    pub async fn stop(self) -> StopReason {
        self.shutdown.trigger(StopReason::Interrupted);
        self.join().await
    }

    pub async fn join(self) -> StopReason {
        timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("watch did not stop in time")
            .expect("watch task panicked")
            .expect("watch failed")
    }
}
