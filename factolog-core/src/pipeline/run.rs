use crate::aggregate::Aggregator;
use crate::conf::WatchConfig;
use crate::notify::{Notifier, WebhookNotifier};
use crate::pipeline::{Driver, Shutdown, StopReason, listen_for_signals};
use crate::snapshot::SnapshotPublisher;
use crate::tail::Tailer;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

const TASK_STOP_GRACE: Duration = Duration::from_secs(2);

/// Watch the configured log until interrupted or until tailing fails.
pub async fn run(config: WatchConfig) -> Result<StopReason> {
    let shutdown = Shutdown::new();

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if let Err(e) = listen_for_signals(shutdown).await {
                tracing::error!(error = %e, "failed to install signal handlers");
            }
        }
    });

    run_until(config, shutdown).await
}

/// Like `run`, but stopped only through the given `shutdown`.
pub async fn run_until(config: WatchConfig, shutdown: Shutdown) -> Result<StopReason> {
    let (aggregator, notify_worker) = match &config.webhook_url {
        Some(url) => {
            let (notifier, worker) = WebhookNotifier::spawn(url.clone(), config.bot_name.clone())
                .context("failed to start webhook notifier")?;
            let notifier: Arc<dyn Notifier> = Arc::new(notifier);
            (Aggregator::with_notifier(notifier), Some(worker))
        }
        None => (Aggregator::new(), None),
    };

    let (tx, mut rx) = mpsc::unbounded_channel();

    let tailer = Tailer::new(&config.log_file).with_poll_interval(config.poll_interval());
    let tail_task = tokio::spawn(tailer.run(tx, shutdown.clone()));

    let publish_task = config.output_file.as_ref().map(|path| {
        let publisher = SnapshotPublisher::new(aggregator.reader(), path, config.frequency());
        tokio::spawn(publisher.run(shutdown.clone()))
    });

    let mut driver = Driver::new(aggregator);
    driver.drain(&mut rx, &shutdown).await;

    let stats = driver.stats();
    tracing::info!(
        lines = stats.lines,
        events = stats.events,
        ignored = stats.ignored,
        dropped = stats.dropped,
        actors = driver.aggregator().reader().actor_count(),
        "driver stopped"
    );

    // Dropping the aggregator releases the last notifier handle, which lets
    // the delivery worker drain and exit.
    drop(driver);
    drop(rx);

    join("tailer", tail_task).await;
    if let Some(task) = publish_task {
        join("snapshot publisher", task).await;
    }
    if let Some(worker) = notify_worker {
        join("notification worker", worker).await;
    }

    Ok(shutdown.reason().unwrap_or(StopReason::Interrupted))
}

async fn join<T>(name: &'static str, task: JoinHandle<T>) {
    match timeout(TASK_STOP_GRACE, task).await {
        Ok(Ok(_)) => tracing::debug!(task = name, "task stopped"),
        Ok(Err(e)) => tracing::error!(task = name, error = %e, "task panicked"),
        Err(_) => tracing::warn!(task = name, "task did not stop in time; abandoning it"),
    }
}
