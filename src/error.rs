//! error.rs
//! Error taxonomy of the contact API and its mapping to HTTP responses.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Field-level validation failures, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid fields: {}", field_list(.fields))]
pub struct ValidationError {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut err = ValidationError::default();
        err.add(field, message);
        err
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}

fn field_list(fields: &BTreeMap<String, Vec<String>>) -> String {
    fields.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// Missing or malformed input (422).
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Well-formed input with an unacceptable value (400).
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ContactError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ContactError::NotFound(_) => StatusCode::NOT_FOUND,
            ContactError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ContactError::Validation(v) => json!({
                "success": false,
                "detail": self.to_string(),
                "errors": v.fields,
            }),
            ContactError::Storage(e) => {
                log::error!("Storage failure: {:?}", e);
                json!({
                    "success": false,
                    "detail": self.to_string(),
                })
            }
            _ => json!({
                "success": false,
                "detail": self.to_string(),
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
