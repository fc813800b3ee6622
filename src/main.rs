use anyhow::Result;
use std::sync::Arc;

use trivia_backend::{
    app, config, db, logging,
    store::{InMemoryStore, PgStore, TriviaStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting trivia backend"
    );

    let store: Arc<dyn TriviaStore> = match &settings.database_url {
        Some(database_url) => {
            let pool = db::create_pool(&settings, database_url).await?;
            if settings.database_run_migrations {
                db::run_migrations(&pool).await?;
            }
            Arc::new(PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set - using in-memory store, data is lost on exit");
            Arc::new(InMemoryStore::with_default_categories())
        }
    };

    // Create application state
    let state = app::AppState::new(store, settings.clone());

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
