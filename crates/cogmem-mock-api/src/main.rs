//! Local CogmemAi mock API: every client route, in memory, behind a bearer key.

use cogmem_mock_api::{router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LISTEN: &str = "127.0.0.1:8787";
const DEFAULT_API_KEY: &str = "cm_local_dev_key";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key =
        std::env::var("COGMEM_MOCK_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
    if api_key == DEFAULT_API_KEY {
        tracing::warn!(
            "COGMEM_MOCK_API_KEY not set, accepting the default key {}",
            DEFAULT_API_KEY
        );
    }
    let app = router(Arc::new(AppState::new(api_key)));
    let addr: SocketAddr = std::env::var("COGMEM_MOCK_LISTEN")
        .unwrap_or_else(|_| DEFAULT_LISTEN.to_string())
        .parse()?;
    tracing::info!("CogmemAi mock API listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .await?;
    Ok(())
}
