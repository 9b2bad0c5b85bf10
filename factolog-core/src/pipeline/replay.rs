use crate::aggregate::{Aggregator, Roster};
use crate::pipeline::Driver;
use crate::tail::LineBuffer;
use anyhow::Context;
use std::path::Path;

/// Fold an existing log file once, without following it or notifying.
pub fn replay(path: &Path) -> anyhow::Result<Roster> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut lines = LineBuffer::new();
    let mut driver = Driver::new(Aggregator::new());

    for line in lines.push(&bytes).into_iter().chain(lines.flush()) {
        driver.ingest(&line);
    }

    let stats = driver.stats();
    tracing::info!(
        path = %path.display(),
        lines = stats.lines,
        events = stats.events,
        ignored = stats.ignored,
        dropped = stats.dropped,
        "replay finished"
    );

    Ok(driver.aggregator().snapshot())
}
