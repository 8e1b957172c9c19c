//! handlers/mod.rs
//! HTTP handlers, one module per resource.

pub mod contact_handler;
pub mod health_handler;
