use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use safety_api::logging::{init_logging, Verbosity};
use safety_api::shutdown::shutdown_signal;
use safety_api::web::{self, AppState};
use safety_api::{Config, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenv().ok();

    // 1. Logging
    init_logging(Verbosity::Normal);

    // 2. Config and in-memory store
    let config = Config::from_env().context("invalid configuration")?;
    let addr = config.listen_addr()?;
    let store = Store::new();

    // 3. Router
    let app = web::router(AppState::new(store, config.service_name.as_str()));

    // 4. Serve
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    let bound_addr = listener.local_addr()?;
    info!(
        build_id = env!("SAFETY_API_BUILD_ID"),
        "{} listening on http://{}", config.service_name, bound_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}
