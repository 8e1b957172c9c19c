//! tests/mod.rs
//! Shared helpers for the service and HTTP tests.


use sqlx::sqlite::SqlitePoolOptions;

use crate::models::contact_model::ContactDraft;
use crate::services::contact_service::ContactService;

/// Service over a private in-memory database. A single connection keeps every
/// query on the same database.
pub async fn create_test_service() -> ContactService {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    let service = ContactService::new(pool);
    service
        .run_migrations()
        .await
        .expect("Failed to run migrations");
    service
}

pub fn draft(name: &str, email: &str, service: Option<&str>) -> ContactDraft {
    ContactDraft {
        name: name.to_string(),
        email: email.to_string(),
        service: service.map(str::to_string),
        message: format!("Message from {}", name),
    }
}
