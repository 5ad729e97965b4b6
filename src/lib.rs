//! Bibliotheca Library Server
//!
//! Tracks books, the people who borrow them and who holds what, behind a
//! REST JSON API. A book is either available or assigned to one person; an
//! assignment older than ten days is reported as overdue.

use std::sync::Arc;

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod lending;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
