use crate::error::AppError;
use crate::models::{CountResponse, GameRequest, TotalResponse};
use crate::state::AppState;
use axum::{Json, extract::State};
use matchmaking_engine::PoolCounts;

use super::required;

pub async fn total_searching(State(state): State<AppState>) -> Json<TotalResponse> {
    Json(TotalResponse {
        total: state.engine.count_total(),
    })
}

pub async fn searching_by_game(
    State(state): State<AppState>,
    Json(payload): Json<GameRequest>,
) -> Result<Json<CountResponse>, AppError> {
    let game = required(payload.game, "game")?;
    let count = state.engine.count_by_game(&game)?;

    Ok(Json(CountResponse { count }))
}

pub async fn stats(State(state): State<AppState>) -> Json<PoolCounts> {
    Json(state.engine.counts())
}
