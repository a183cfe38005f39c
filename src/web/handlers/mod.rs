//! API handlers for the board service.

pub mod reply;
pub mod thread;

pub use reply::*;
pub use thread::*;

use std::sync::Arc;

use crate::db::Database;

/// Shared database handle for handlers. The underlying pool is cloneable
/// and safe to use from concurrent requests.
pub type SharedDatabase = Arc<Database>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: SharedDatabase,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase) -> Self {
        Self { db }
    }
}
