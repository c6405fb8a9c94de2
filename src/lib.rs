//! NourishNet - Surplus food donations between donors and NGOs.
//!
//! Donors post donations, NGOs claim and complete them. The lifecycle
//! itself lives in the `domain` crate; this crate wires it to storage,
//! sessions and HTTP.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **services**: Identity, session, donation lifecycle and dashboard use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, session extractor and routes
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
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Donation, DonationStatus, User, UserRole};
pub use errors::{AppError, AppResult};
