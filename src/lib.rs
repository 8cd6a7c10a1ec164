//! # Estoque API
//!
//! Backend of an inventory-management application, built with Rust, Axum and MySQL.
//!
//! ## Overview
//!
//! This crate wires the process together:
//!
//! - **Configuration**: `DB_HOST`, `DB_NAME`, `DB_USER`, `DB_PASSWORD` loaded from
//!   the environment or a `.env` file (see [`estoque_config`])
//! - **Database handle**: one MySQL pool per process, built lazily and passed
//!   explicitly through [`state::AppState`] (see [`estoque_db`])
//! - **Startup policy**: what a failed connectivity probe means for the process
//!   (see [`bootstrap`])
//! - **Health**: `GET /health` reports database reachability
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── bootstrap.rs      # Startup connectivity policy
//! ├── docs.rs           # OpenAPI documentation
//! ├── logging.rs        # Tracing subscriber and request logging
//! ├── modules/
//! │   └── health/      # Health endpoint
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! crates/
//! ├── estoque-config/   # Environment configuration
//! └── estoque-db/       # Connection handle and connectivity probe
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! DB_HOST=localhost
//! DB_NAME=inventory
//! DB_USER=root
//! DB_PASSWORD=secret
//! DB_STARTUP_POLICY=degrade
//! ```
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`
//!
//! ## Security Considerations
//!
//! - The database password is held in a redacting [`estoque_config::Secret`] and is never logged

pub mod bootstrap;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use estoque_config;
pub use estoque_db;
