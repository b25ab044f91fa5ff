// src/domain/mod.rs
pub mod location;
pub mod provider_model;
pub mod service_model;
pub mod service_request_model;
pub mod user_model;
