//! jitterbug server
//!
//! Small demo service with deliberately unpredictable behavior:
//! - `/simple`  : instant fixed response
//! - `/complex` : random delays plus coin-flip failures
//! - `/metrics` : Prometheus text exposition with host CPU/memory gauges
//! - `/healthz` : liveness

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use jitterbug_server::{app_state, config, router};

const CONFIG_PATH: &str = "jitterbug.yaml";

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,jitterbug_server=debug")),
        )
        .init();

    // Config file is optional; compiled defaults apply when it is absent.
    let cfg = config::load_or_default(CONFIG_PATH).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "jitterbug-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
