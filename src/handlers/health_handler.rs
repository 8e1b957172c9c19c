//! handlers/health_handler.rs
//! Banner and health probe.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::ContactError;
use crate::services::contact_service::ContactService;

/// GET /
pub async fn root_endpoint() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Contact API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/health
pub async fn health_endpoint(
    contact_service: web::Data<ContactService>,
) -> Result<HttpResponse, ContactError> {
    contact_service.ping().await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "database": "connected",
    })))
}
