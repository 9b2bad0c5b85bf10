use crate::pipeline::{Shutdown, StopReason};
use crate::tail::{LineBuffer, TailError};
use std::io::{ErrorKind, SeekFrom};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

const MAX_READ_CHUNK_BYTES: u64 = 1024 * 1024; // 1 MiB per iteration

/// Identity of the file currently behind the path. Changes on rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileId {
    dev: u64,
    ino: u64,
}

pub struct Tailer {
    path: PathBuf,
    poll_interval: Duration,
    offset: u64,
    file_id: Option<FileId>,
    lines: LineBuffer,
}

impl Tailer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            offset: 0,
            file_id: None,
            lines: LineBuffer::new(),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Replay the file from the start, then follow appends until shutdown.
    ///
    /// Any error returned here has already set `shutdown`.
    pub async fn run(
        mut self,
        tx: UnboundedSender<String>,
        shutdown: Shutdown,
    ) -> Result<(), TailError> {
        let result = self.follow(&tx, &shutdown).await;

        if let Err(e) = &result {
            tracing::error!(error = %e, "tailer stopped");
            shutdown.trigger(StopReason::TailerStopped);
        }
        result
    }

    async fn follow(
        &mut self,
        tx: &UnboundedSender<String>,
        shutdown: &Shutdown,
    ) -> Result<(), TailError> {
        let unreadable = |source: std::io::Error| TailError::Unreadable {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).await.map_err(unreadable)?;
        let meta = file.metadata().await.map_err(unreadable)?;
        drop(file);
        self.file_id = file_id(&meta);

        info!(path = %self.path.display(), size = meta.len(), "starting tailer");

        while !shutdown.is_triggered() {
            let meta = match fs::metadata(&self.path).await {
                Ok(meta) => meta,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(
                        path = %self.path.display(),
                        "log file missing; waiting for it to reappear"
                    );
                    shutdown.sleep(self.poll_interval).await;
                    continue;
                }
                Err(e) => return Err(TailError::read(&self.path, e)),
            };

            let current_id = file_id(&meta);
            if current_id != self.file_id {
                info!(path = %self.path.display(), "log file replaced; following new file");
                if let Some(partial) = self.lines.flush() {
                    if !forward(tx, partial) {
                        return Ok(());
                    }
                }
                self.file_id = current_id;
                self.offset = 0;
            }

            let size = meta.len();
            if size < self.offset {
                warn!(
                    path = %self.path.display(),
                    previous_offset = self.offset,
                    current_size = size,
                    "log file truncated; reading from the start"
                );
                self.offset = 0;
                self.lines.clear();
            }

            if size == self.offset {
                shutdown.sleep(self.poll_interval).await;
                continue;
            }

            let chunk = match self.read_chunk().await {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(TailError::read(&self.path, e)),
            };

            if chunk.is_empty() {
                shutdown.sleep(self.poll_interval).await;
                continue;
            }
            self.offset += chunk.len() as u64;

            for line in self.lines.push(&chunk) {
                if !forward(tx, line) {
                    return Ok(());
                }
            }
        }

        Ok(())
    }

    async fn read_chunk(&self) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(&self.path).await?;
        file.seek(SeekFrom::Start(self.offset)).await?;

        let mut buf = Vec::new();
        file.take(MAX_READ_CHUNK_BYTES).read_to_end(&mut buf).await?;
        Ok(buf)
    }
}

// A closed channel means the driver is gone; that is a normal stop.
fn forward(tx: &UnboundedSender<String>, line: String) -> bool {
    if tx.send(line).is_err() {
        debug!("line receiver dropped; tailer stopping");
        return false;
    }
    true
}

#[cfg(unix)]
fn file_id(meta: &std::fs::Metadata) -> Option<FileId> {
    use std::os::unix::fs::MetadataExt;
    Some(FileId {
        dev: meta.dev(),
        ino: meta.ino(),
    })
}

#[cfg(not(unix))]
fn file_id(_meta: &std::fs::Metadata) -> Option<FileId> {
    None
}
