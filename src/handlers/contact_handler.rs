//! handlers/contact_handler.rs
use actix_web::{web, HttpResponse};

use crate::error::{ContactError, ValidationError};
use crate::models::contact_model::{
    ContactForm, ContactResponse, ListContactsResponse, MessageResponse, StatsResponse,
    StatusQuery, SubmitContactResponse,
};
use crate::services::contact_service::ContactService;
use crate::validation::validate_contact_form;

/// POST /api/contact
pub async fn submit_contact_endpoint(
    contact_service: web::Data<ContactService>,
    body: web::Json<ContactForm>,
) -> Result<HttpResponse, ContactError> {
    let draft = validate_contact_form(body.into_inner())?;
    let contact_id = contact_service.submit(draft).await?;

    Ok(HttpResponse::Ok().json(SubmitContactResponse {
        success: true,
        message: "Contact form submitted successfully".to_string(),
        contact_id,
    }))
}

/// GET /api/contacts
pub async fn list_contacts_endpoint(
    contact_service: web::Data<ContactService>,
) -> Result<HttpResponse, ContactError> {
    let contacts = contact_service.list().await?;

    Ok(HttpResponse::Ok().json(ListContactsResponse {
        success: true,
        count: contacts.len(),
        contacts,
    }))
}

/// GET /api/contacts/{id}
pub async fn get_contact_endpoint(
    contact_service: web::Data<ContactService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ContactError> {
    let contact_id = path.into_inner();
    let contact = contact_service.get_by_id(&contact_id).await?;

    Ok(HttpResponse::Ok().json(ContactResponse {
        success: true,
        contact,
    }))
}

/// PUT /api/contacts/{id}/status?status=...
pub async fn update_status_endpoint(
    contact_service: web::Data<ContactService>,
    path: web::Path<String>,
    query: web::Query<StatusQuery>,
) -> Result<HttpResponse, ContactError> {
    let contact_id = path.into_inner();
    let requested = query
        .into_inner()
        .status
        .ok_or_else(|| ValidationError::single("status", "status query parameter is required"))?;

    let status = contact_service
        .update_status(&contact_id, &requested)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: format!("Contact status updated to {}", status),
    }))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact_endpoint(
    contact_service: web::Data<ContactService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ContactError> {
    let contact_id = path.into_inner();
    contact_service.delete(&contact_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: "Contact deleted successfully".to_string(),
    }))
}

/// GET /api/stats
pub async fn stats_endpoint(
    contact_service: web::Data<ContactService>,
) -> Result<HttpResponse, ContactError> {
    let stats = contact_service.stats().await?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        success: true,
        stats,
    }))
}
