use std::path::Path;
use std::str::FromStr;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use dotenv::dotenv;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Pool, Sqlite};

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::contact_service::ContactService;

mod app;
mod config;
mod error;
mod handlers;
mod logger;
mod models;
mod services;
mod validation;

#[cfg(test)]
mod tests;

/// Creates the parent folder of a file-backed SQLite url, e.g. `sqlite://data/contacts.db`.
fn ensure_sqlite_dir(database_url: &str) -> Result<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or_default();

    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

async fn setup_database(config: &AppConfig) -> Result<Pool<Sqlite>> {
    // 1) Make sure the folder of the database file exists
    ensure_sqlite_dir(&config.database_url)?;

    log::info!("Connecting to {}", config.database_url);

    // 2) Parse the url; the file is created on first connect
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{}'", config.database_url))?
        .create_if_missing(true);

    // 3) Open the pool
    let db_pool = Pool::<Sqlite>::connect_with(options)
        .await
        .context("Could not connect to the contacts database")?;

    Ok(db_pool)
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok(); // .env before reading any variable
    init_logger();

    let config = AppConfig::from_env()?;
    // Database + schema
    let db_pool = setup_database(&config).await?;

    let contact_service = ContactService::new(db_pool);
    contact_service.run_migrations().await?;

    // Kept outside the factory closure to close the pool on shutdown
    let shutdown_service = contact_service.clone();

    // Start the server
    log::info!("Starting server on {}:{}", config.host, config.port);
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(contact_service.clone()))
            .configure(app::init_app)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("Could not bind {}:{}", config.host, config.port))?
        .run()
        .await
        .context("HTTP server stopped with an error")?;

    shutdown_service.close().await;
    log::info!("Server stopped");
    Ok(())
}
