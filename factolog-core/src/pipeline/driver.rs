use crate::aggregate::Aggregator;
use crate::grammar::parse_line;
use crate::pipeline::{Shutdown, StopReason};
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Raw lines received from the tailer.
    pub lines: u64,
    /// Lines applied to the roster.
    pub events: u64,
    /// Lines that were not event lines at all.
    pub ignored: u64,
    /// Event lines dropped because their detail was malformed.
    pub dropped: u64,
}

/// Parse/aggregate loop. Owns the aggregator, so it is the roster's only writer.
pub struct Driver {
    aggregator: Aggregator,
    stats: IngestStats,
}

impl Driver {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            stats: IngestStats::default(),
        }
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// Run one raw line through the grammar and into the aggregator.
    pub fn ingest(&mut self, line: &str) {
        self.stats.lines += 1;

        let Some(event) = parse_line(line) else {
            tracing::trace!(line, "ignoring non-event line");
            self.stats.ignored += 1;
            return;
        };

        match self.aggregator.process(&event) {
            Ok(()) => self.stats.events += 1,
            Err(e) => {
                tracing::warn!(error = %e, line, "dropping malformed event");
                self.stats.dropped += 1;
            }
        }
    }

    /// Consume lines until shutdown or until the tailer hangs up.
    pub async fn drain(&mut self, rx: &mut UnboundedReceiver<String>, shutdown: &Shutdown) {
        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                line = rx.recv() => match line {
                    Some(line) => self.ingest(&line),
                    None => {
                        tracing::warn!("tailer hung up");
                        shutdown.trigger(StopReason::TailerStopped);
                        break;
                    }
                },
            }
        }
    }
}
