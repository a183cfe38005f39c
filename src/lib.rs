//! anonboard - Anonymous Message Board
//!
//! A message-board backend exposing thread and reply resources over HTTP,
//! backed by SQLite. Threads live on named boards, carry replies, and can be
//! reported or deleted with the secret chosen at creation time.

pub mod board;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod secret;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use error::{BoardError, Result};
pub use web::WebServer;
