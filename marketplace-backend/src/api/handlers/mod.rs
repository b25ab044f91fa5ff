// src/api/handlers/mod.rs
pub mod admin_handler;
pub mod auth_handler;
pub mod booking_handler;
pub mod directory_handler;
