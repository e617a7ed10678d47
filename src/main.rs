use oncehuman_tools::{config::ServerConfig, routes, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is the normal production case.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;
    let backend = config.backend_url.clone();

    let state = AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos configuration failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %backend, "oncehuman-tools listening");
    axum::serve(listener, app).await.expect("server failed");
}
