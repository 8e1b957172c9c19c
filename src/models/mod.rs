//! models/mod.rs
//! Shared models and request/response bodies.

pub mod contact_model;
