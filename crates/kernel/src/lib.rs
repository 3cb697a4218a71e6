//! Ordine Kernel Library
//!
//! Hook registry, menu assembly, manifest loading, and the HTTP surface.
//! The main entry point for running the server is the `ordine` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod manifest;
pub mod menu;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult, MenuError};
pub use state::AppState;
