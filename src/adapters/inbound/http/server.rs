use crate::shared::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

#[cfg(unix)]
use crate::application::RecordSnapshot;
#[cfg(unix)]
use crate::ports::outbound::RecordStore;
#[cfg(unix)]
use std::sync::Arc;

/// Binds the listening socket.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}:{}: {}", host, port, e))?;
    Ok(listener)
}

/// Serves `router` until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}

/// Reloads the record snapshot each time the process receives SIGHUP.
///
/// A failed reload is logged and the previous records stay in service.
#[cfg(unix)]
pub fn spawn_reload_on_hangup<S>(
    snapshot: Arc<RecordSnapshot<S>>,
) -> Result<tokio::task::JoinHandle<()>>
where
    S: RecordStore + 'static,
{
    let mut hangup = signal::unix::signal(signal::unix::SignalKind::hangup())?;

    Ok(tokio::spawn(async move {
        while hangup.recv().await.is_some() {
            tracing::info!("Received SIGHUP, reloading record store");
            if let Err(e) = snapshot.reload().await {
                tracing::error!("Record store reload failed, keeping previous records: {:#}", e);
            }
        }
    }))
}
