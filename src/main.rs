use mimalloc::MiMalloc;
use origin_notes::SecretStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &origin_notes::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        bind_addr = %cfg.bind_addr,
        secret_store_url = %cfg.secret_store_url,
        secret_id = %cfg.secret_id,
        loglevel = %cfg.loglevel
    );

    let client = reqwest::Client::builder()
        .user_agent("origin-notes/0.1")
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(15))
        .build()
        .expect("FATAL: initialize secret store HTTP client failed");

    let store: Arc<dyn SecretStore> = Arc::new(origin_notes::HttpSecretStore::new(
        client,
        cfg.secret_store_url.clone(),
    ));

    // Verify secret store access before serving any traffic.
    match origin_notes::secrets::fetch_credentials(store.as_ref(), &cfg.secret_id).await {
        Ok(creds) => {
            info!(database_host = %creds.host, "secret store access confirmed");
        }
        Err(e) => {
            error!(error = %e, "secret store access failed; cannot proceed without database credentials");
            std::process::exit(1);
        }
    }

    let state = origin_notes::router::NotesState::new(store, cfg.secret_id.clone());
    let app = origin_notes::router::notes_router(state);

    let listener = TcpListener::bind(&cfg.bind_addr).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
    info!("shutdown signal received");
}
