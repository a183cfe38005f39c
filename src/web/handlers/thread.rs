//! Thread handlers for the board API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::board::ThreadService;
use crate::web::dto::{
    ActionOutcome, CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest,
    ThreadDetailResponse, ThreadSummaryResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/threads/:board - List the most recently bumped threads.
///
/// At most 10 threads, each with its 3 most recent replies and the true
/// total reply count.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadSummaryResponse>>, ApiError> {
    let summaries = ThreadService::new(&state.db).list_board(&board).await?;
    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}

/// POST /api/threads/:board - Create a new thread.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<CreateThreadRequest>,
) -> Result<Json<ThreadDetailResponse>, ApiError> {
    let thread = ThreadService::new(&state.db)
        .create(&board, &req.text, &req.delete_password)
        .await?;

    tracing::debug!(board = %board, thread_id = %thread.id, "Thread created");
    Ok(Json(thread.into()))
}

/// PUT /api/threads/:board - Flag a thread as reported.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<ReportThreadRequest>,
) -> Result<ActionOutcome, ApiError> {
    ThreadService::new(&state.db)
        .report(&board, &req.thread_id)
        .await?;

    Ok(ActionOutcome::Reported)
}

/// DELETE /api/threads/:board - Delete a thread with its secret.
///
/// A wrong secret answers with the literal `incorrect password` body and
/// leaves the thread untouched.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(req): Json<DeleteThreadRequest>,
) -> Result<ActionOutcome, ApiError> {
    let outcome = ThreadService::new(&state.db)
        .delete(&board, &req.thread_id, req.delete_password.as_deref())
        .await?;

    Ok(outcome.into())
}
