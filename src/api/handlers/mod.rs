//! HTTP request handlers.

pub mod bank_handler;
pub mod health_handler;

pub use bank_handler::bank_routes;
pub use health_handler::health;
