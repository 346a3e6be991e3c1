use std::sync::Arc;

use courtside::server::{self, config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let advisor = match startup::build_advisor_client(&config) {
        Ok(advisor) => advisor,
        Err(e) => {
            eprintln!("Failed to build advisor client: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        store: startup::build_store(),
        identity: startup::build_identity_provider(&config),
        media: startup::build_media_store(&config),
        advisor: Arc::new(advisor),
    };

    let router = server::router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router)
        .await
        .expect("Server exited with an error");
}
