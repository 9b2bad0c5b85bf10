use crate::pipeline::{Shutdown, StopReason};

/// Set `shutdown` on Ctrl-C (and SIGTERM on unix).
pub async fn listen_for_signals(shutdown: Shutdown) -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res?,
            _ = term.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    tracing::info!("interrupt received");
    shutdown.trigger(StopReason::Interrupted);
    Ok(())
}
