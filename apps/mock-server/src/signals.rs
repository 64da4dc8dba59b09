use anyhow::Result;
use tokio::signal;

/// Wait for termination signals (Ctrl+C, SIGTERM).
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<()> {
    tokio::select! {
        result = wait_ctrl_c() => result?,
        result = wait_sigterm() => result?,
    }
    tracing::info!("Shutdown signal received, stopping mock server");
    Ok(())
}

async fn wait_ctrl_c() -> Result<()> {
    signal::ctrl_c().await.inspect_err(|e| {
        tracing::error!(%e, "Error handling Ctrl+C signal");
    })?;
    tracing::debug!("Received Ctrl+C signal");
    Ok(())
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<()> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .inspect_err(|e| tracing::error!(%e, "Failed to install SIGTERM handler"))?;
    sigterm.recv().await;
    tracing::debug!("Received SIGTERM signal");
    Ok(())
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<()> {
    std::future::pending::<Result<()>>().await
}
