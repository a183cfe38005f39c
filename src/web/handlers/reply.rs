//! Reply handlers for the board API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::board::ReplyService;
use crate::web::dto::{
    ActionOutcome, CreateReplyRequest, DeleteReplyRequest, ReplyResponse, ReportReplyRequest,
    ThreadDetailQuery, ThreadDetailResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/replies/:board?thread_id=... - A thread with all of its replies.
pub async fn thread_detail(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ThreadDetailQuery>,
) -> Result<Json<ThreadDetailResponse>, ApiError> {
    let detail = ReplyService::new(&state.db)
        .thread_detail(&board, &query.thread_id)
        .await?;
    Ok(Json(detail.into()))
}

/// POST /api/replies/:board - Post a reply to a thread.
///
/// Bumps the parent thread, resurfacing it in the board listing.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<CreateReplyRequest>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let reply = ReplyService::new(&state.db)
        .create(&board, &req.thread_id, &req.text, &req.delete_password)
        .await?;

    tracing::debug!(board = %board, thread_id = %req.thread_id, reply_id = %reply.id, "Reply created");
    Ok(Json(reply.into()))
}

/// PUT /api/replies/:board - Flag a reply as reported.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<ReportReplyRequest>,
) -> Result<ActionOutcome, ApiError> {
    ReplyService::new(&state.db)
        .report(&board, &req.thread_id, &req.reply_id)
        .await?;

    Ok(ActionOutcome::Reported)
}

/// DELETE /api/replies/:board - Delete a reply with its secret.
///
/// The parent thread is untouched either way.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<DeleteReplyRequest>,
) -> Result<ActionOutcome, ApiError> {
    let outcome = ReplyService::new(&state.db)
        .delete(
            &board,
            &req.thread_id,
            &req.reply_id,
            req.delete_password.as_deref(),
        )
        .await?;

    Ok(outcome.into())
}
