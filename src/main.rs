use std::sync::Arc;

use dotenvy::dotenv;
use filmes_api::config::settings::AppConfig;
use filmes_api::infrastructure::db::pool;
use filmes_api::modules::movie::memory::InMemoryMovieRepository;
use filmes_api::modules::movie::repository::{MovieRepository, PgMovieRepository};
use filmes_api::state::AppState;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new();

    let movies: Arc<dyn MovieRepository> = match &config.database_url {
        Some(url) => {
            let db = pool::connect_to_db(url, config.db_max_connections).await?;
            pool::run_migrations(&db).await?;
            Arc::new(PgMovieRepository::new(db))
        }
        None => {
            warn!("DATABASE_URL is not set, movies are kept in memory and lost on restart");
            Arc::new(InMemoryMovieRepository::new())
        }
    };

    let state = AppState::new(movies);
    let app = filmes_api::app::create_app(state).await;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
