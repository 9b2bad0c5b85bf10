use crate::cli::WatchArgs;
use anyhow::{Context, Result};
use factolog_core::conf::{ConfigLayer, load_layer, resolve};
use factolog_core::pipeline::{self, StopReason};
use std::process::ExitCode;

pub fn run(args: WatchArgs) -> Result<ExitCode> {
    let file_layer = match &args.config {
        Some(path) => load_layer(path)?,
        None => ConfigLayer::default(),
    };
    let config = resolve(file_layer.merge(args.layer()))?;

    tracing::info!(
        log_file = %config.log_file.display(),
        output_file = ?config.output_file,
        frequency_secs = config.frequency_secs,
        notifications = config.webhook_url.is_some(),
        "starting watch"
    );

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")?;

    let reason = rt.block_on(pipeline::run(config))?;

    // Tasks abandoned at shutdown must not hold the process open.
    rt.shutdown_background();

    Ok(match reason {
        StopReason::Interrupted => {
            tracing::info!("Shutting down");
            ExitCode::SUCCESS
        }
        StopReason::TailerStopped => ExitCode::FAILURE,
    })
}
