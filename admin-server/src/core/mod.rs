//! Core module - server configuration, state and startup
//!
//! - [`Config`] - environment-driven configuration with fail-fast validation
//! - [`ServerState`] - shared service handles
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
