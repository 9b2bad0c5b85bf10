use anyhow::{Context, Result};
use factolog_core::pipeline;
use factolog_core::snapshot::StatusDocument;
use std::io::{self, Write};
use std::path::Path;

pub fn run(logfile: &Path) -> Result<()> {
    let roster = pipeline::replay(logfile)?;
    let json = StatusDocument::now(roster).to_json()?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&json)
        .and_then(|_| writeln!(stdout))
        .context("failed to write status document")?;
    Ok(())
}
