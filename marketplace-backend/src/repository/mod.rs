// src/repository/mod.rs
pub mod provider_repository;
pub mod service_repository;
pub mod service_request_repository;
pub mod user_repository;
