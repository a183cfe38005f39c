//! Request and response DTOs for the board API.

mod request;
mod response;

pub use request::{
    CreateReplyRequest, CreateThreadRequest, DeleteReplyRequest, DeleteThreadRequest,
    ReportReplyRequest, ReportThreadRequest, ThreadDetailQuery,
};
pub use response::{
    ActionOutcome, ReplyResponse, ThreadDetailResponse, ThreadSummaryResponse,
};
