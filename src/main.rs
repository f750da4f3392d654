use debita::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let session = startup::connect_to_session(&config).await.unwrap();
    let cache = startup::connect_to_cache(&config).await.unwrap();

    tracing::info!("Starting server on {}", config.bind_addr);

    let router = router::routes()
        .with_state(AppState { db, cache })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap();

    axum::serve(listener, router).await.unwrap();
}
