use axum::http::HeaderValue;
use board_backend::config::Config;
use board_backend::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG wins when set
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let app_state = initialize_backend(&config).await?;
    let cors_origin = config.cors_origin.parse::<HeaderValue>()?;
    let app = create_router(app_state, cors_origin);

    let addr = config.socket_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
