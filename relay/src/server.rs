//! axumサーバー起動・シャットダウンハンドリング

use crate::AppState;
use tokio::net::TcpListener;
use tracing::info;
use yoed_common::error::{RelayError, RelayResult};

/// 指定アドレスにバインド
pub async fn bind(bind_addr: &str) -> RelayResult<TcpListener> {
    TcpListener::bind(bind_addr)
        .await
        .map_err(|source| RelayError::Bind {
            addr: bind_addr.to_string(),
            source,
        })
}

/// axumサーバーを起動し、シャットダウンシグナルを待機する
pub async fn run(state: AppState, bind_addr: &str) -> RelayResult<()> {
    let listener = bind(bind_addr).await?;
    serve(state, listener).await
}

/// バインド済みリスナーでサーバーを動かす
pub async fn serve(state: AppState, listener: TcpListener) -> RelayResult<()> {
    let app = crate::api::create_router(state);

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
