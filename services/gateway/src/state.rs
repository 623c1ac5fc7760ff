use matchmaking_engine::MatchmakingEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchmakingEngine>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: Arc::new(MatchmakingEngine::new()),
        }
    }
}
