//! probekit server
//!
//! - Config: `$PROBEKIT_CONFIG` or `probekit.yaml`, defaults if absent
//! - `PORT` overrides the listen port
//! - Ctrl-C / SIGTERM: mark draining, then graceful shutdown

use tracing_subscriber::{fmt, EnvFilter};

use probekit_core::error::{ProbeError, Result};
use probekit_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "probekit-server exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let port = std::env::var("PORT").ok();
    let listen = config::resolve_listen(&cfg, port.as_deref())?;

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ProbeError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "probekit-server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(drain_on_signal(state))
        .await
        .map_err(|e| ProbeError::Internal(format!("server failed: {e}")))?;

    tracing::info!("probekit-server stopped");
    Ok(())
}

async fn drain_on_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    state.set_draining();
    tracing::info!("shutdown signal received, draining");
}
