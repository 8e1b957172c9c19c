//! app.rs
use actix_web::{error, web, HttpRequest};

use crate::error::{ContactError, ValidationError};
use crate::handlers::{contact_handler, health_handler};

/// Bodies that cannot be parsed as a contact form are validation failures (422).
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected contact payload: {}", err);
    ContactError::Validation(ValidationError::single("body", err.to_string())).into()
}

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(health_handler::root_endpoint))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health_handler::health_endpoint))
                .route(
                    "/contact",
                    web::post().to(contact_handler::submit_contact_endpoint),
                )
                .route("/stats", web::get().to(contact_handler::stats_endpoint))
                .service(
                    web::scope("/contacts")
                        .route("", web::get().to(contact_handler::list_contacts_endpoint))
                        .route(
                            "/{id}",
                            web::get().to(contact_handler::get_contact_endpoint),
                        )
                        .route(
                            "/{id}",
                            web::delete().to(contact_handler::delete_contact_endpoint),
                        )
                        .route(
                            "/{id}/status",
                            web::put().to(contact_handler::update_status_endpoint),
                        ),
                ),
        );
}
