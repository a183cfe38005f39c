//! Web API module for anonboard.
//!
//! This module provides the HTTP surface of the board service: thread and
//! reply resources under `/api`, shaped responses with private fields
//! stripped, and the stable literal bodies for report/delete outcomes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
