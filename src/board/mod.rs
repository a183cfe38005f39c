//! Board module for anonboard.
//!
//! This module provides the message-board core:
//! - Thread management (create, windowed listing, report, delete)
//! - Reply management (create, full listing, report, delete), nested under a thread
//! - Secret-gated deletion for both, with cascade from thread to replies

mod reply;
mod reply_repository;
mod service;
mod thread;
mod thread_repository;

pub use reply::{NewReply, Reply};
pub use reply_repository::ReplyRepository;
pub use service::{
    DeleteOutcome, ReplyService, ThreadDetail, ThreadService, ThreadSummary, BOARD_PAGE_SIZE,
    LISTED_REPLY_COUNT,
};
pub use thread::{NewThread, Thread};
pub use thread_repository::ThreadRepository;
