// src/api/dto/mod.rs
pub mod auth_dto;
pub mod booking_dto;
pub mod common;
pub mod provider_dto;
