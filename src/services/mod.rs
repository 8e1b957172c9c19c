//! services/mod.rs
//! Business layer of the app.

pub mod contact_service;
