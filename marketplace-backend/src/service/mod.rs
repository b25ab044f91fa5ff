// src/service/mod.rs
pub mod account_service;
pub mod booking_service;
pub mod directory_service;
pub mod storage_service;
