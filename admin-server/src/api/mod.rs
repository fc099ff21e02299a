//! API route modules
//!
//! - [`health`] - health check (public)
//! - [`auth`] - login and current-user endpoints
//! - [`departments`] - department management
//! - [`employees`] - employee management

pub mod auth;
pub mod departments;
pub mod employees;
pub mod health;
