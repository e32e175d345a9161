use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use shared::{get_db_connection, Config};
use tracing::info;

mod error;
mod repositories;
mod routes;
mod services;
mod state;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting quote service...");

    let config = Config::from_env()?;
    let db = get_db_connection(&config.database_url).await?;
    Migrator::up(&db, None).await?;
    info!("Database migrated");

    let state = AppState::new(&config, db);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Quote service listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
