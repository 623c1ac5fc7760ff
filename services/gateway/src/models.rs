use serde::{Deserialize, Serialize};
use serde_json::Value;
use types::entry::MatchResult;

/// Fields are optional so a missing one becomes a 400 from the handler
#[derive(Debug, Clone, Deserialize)]
pub struct JoinQueueRequest {
    pub uid: Option<String>,
    pub game: Option<String>,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub ignored: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRequest {
    pub uid: Option<String>,
    pub game: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameRequest {
    pub game: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckMatchResponse {
    #[serde(rename = "match")]
    pub found: Option<MatchResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalResponse {
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    pub count: usize,
}
