use tokio::signal;
use tracing::warn;

pub async fn listen_for_shutdown() {
    // 等待 Ctrl+C 或 SIGTERM
    #[cfg(unix)]
    {
        let mut term = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(term) => term,
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
                warn!("Shutdown signal received, initiating graceful shutdown...");
                return;
            }
        };
        tokio::select! {
            _ = signal::ctrl_c() => {}
            _ = term.recv() => {}
        }
    }

    #[cfg(not(unix))]
    signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");

    warn!("Shutdown signal received, initiating graceful shutdown...");
}
