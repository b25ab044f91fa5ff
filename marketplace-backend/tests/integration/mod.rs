// tests/integration/mod.rs

pub mod admin_tests;
pub mod middleware_tests;
