//! Banco Proposta - Bank and proposal management service
//!
//! Banks own proposals; deleting a bank deletes its proposals, and a bank
//! saved without one of its proposals drops that proposal. Everything is
//! exposed over HTTP under `/api/banco` with JSON or XML bodies.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and transfer shapes
//! - **services**: Application services over the repositories
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared types (format negotiation, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Bank, Proposal};
pub use errors::{AppError, AppResult};
pub use infra::Database;
