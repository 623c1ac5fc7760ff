use crate::error::AppError;
use crate::models::{CheckMatchResponse, JoinQueueRequest, OkResponse, PlayerRequest};
use crate::state::AppState;
use axum::{Json, extract::State};

use super::required;

pub async fn join_queue(
    State(state): State<AppState>,
    Json(payload): Json<JoinQueueRequest>,
) -> Result<Json<OkResponse>, AppError> {
    let uid = required(payload.uid, "uid")?;
    let game = required(payload.game, "game")?;

    state
        .engine
        .join(&uid, &game, payload.params, payload.ignored.unwrap_or_default())?;

    Ok(Json(OkResponse { ok: true }))
}

/// Leave never fails once the body parses
pub async fn leave_queue(
    State(state): State<AppState>,
    Json(payload): Json<PlayerRequest>,
) -> Json<OkResponse> {
    if let Some(uid) = payload.uid.as_deref() {
        state.engine.leave(uid, payload.game.as_deref().unwrap_or_default());
    }

    Json(OkResponse { ok: true })
}

pub async fn check_match(
    State(state): State<AppState>,
    Json(payload): Json<PlayerRequest>,
) -> Result<Json<CheckMatchResponse>, AppError> {
    let uid = required(payload.uid, "uid")?;
    // An unknown or missing game is only an error when nothing is pending
    let game = payload.game.unwrap_or_default();

    let found = state.engine.poll(&uid, &game)?;

    Ok(Json(CheckMatchResponse { found }))
}
