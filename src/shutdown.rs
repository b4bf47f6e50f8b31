//! Graceful shutdown trigger for `axum::serve`.

use std::future::Future;
use std::io;

use tokio::signal;
use tracing::warn;

/// Resolves on Ctrl+C or SIGTERM. A handler that cannot be installed never
/// fires, so the server keeps running instead of stopping at startup.
pub async fn shutdown_signal() {
    let ctrl_c = wait_for(signal::ctrl_c(), "Ctrl+C");

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("cannot install SIGTERM handler: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

async fn wait_for(signal: impl Future<Output = io::Result<()>>, name: &str) {
    if let Err(e) = signal.await {
        warn!("cannot install {} handler: {}", name, e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_failed_handler_never_fires() {
        let failed = std::future::ready(Err::<(), _>(io::Error::other("no signals")));
        let waited = tokio::time::timeout(Duration::from_millis(50), wait_for(failed, "test")).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn test_delivered_signal_fires() {
        let delivered = std::future::ready(Ok::<(), io::Error>(()));
        let waited =
            tokio::time::timeout(Duration::from_millis(50), wait_for(delivered, "test")).await;
        assert!(waited.is_ok());
    }
}
