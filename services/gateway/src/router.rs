use crate::handlers::{queue, stats};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/joinQueue", post(queue::join_queue))
        .route("/leaveQueue", post(queue::leave_queue))
        .route("/checkMatch", post(queue::check_match))
        .route("/totalSearching", get(stats::total_searching))
        .route("/searchingByGame", post(stats::searching_by_game))
        .route("/stats", get(stats::stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn app() -> Router {
        create_router(AppState::new())
    }

    #[tokio::test]
    async fn test_join_and_match_flow() {
        let app = app();

        let (status, body) = send(&app, "POST", "/joinQueue", Some(json!({
            "uid": "a", "game": "cs2", "params": {"elo": 1000}
        }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));

        send(&app, "POST", "/joinQueue", Some(json!({
            "uid": "b", "game": "cs2", "params": {"elo": 1080}
        }))).await;

        let (_, body) = send(&app, "GET", "/totalSearching", None).await;
        assert_eq!(body, json!({"total": 2}));

        let (status, body) = send(&app, "POST", "/checkMatch", Some(json!({"uid": "a", "game": "cs2"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match"]["opponentId"], json!("b"));
        assert_eq!(body["match"]["players"], json!(["a", "b"]));

        let (_, body) = send(&app, "POST", "/checkMatch", Some(json!({"uid": "b", "game": "cs2"}))).await;
        assert_eq!(body["match"]["opponentId"], json!("a"));

        let (_, body) = send(&app, "POST", "/checkMatch", Some(json!({"uid": "b", "game": "cs2"}))).await;
        assert_eq!(body, json!({"match": null}));

        let (_, body) = send(&app, "POST", "/searchingByGame", Some(json!({"game": "cs2"}))).await;
        assert_eq!(body, json!({"count": 0}));
    }

    #[tokio::test]
    async fn test_join_rejects_unknown_game() {
        let app = app();
        let (status, body) = send(&app, "POST", "/joinQueue", Some(json!({
            "uid": "a", "game": "chess", "params": {}
        }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("BAD_REQUEST"));
    }

    #[tokio::test]
    async fn test_join_rejects_missing_uid() {
        let app = app();
        let (status, _) = send(&app, "POST", "/joinQueue", Some(json!({"game": "cs2"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_leave_always_ok() {
        let app = app();
        let (status, body) = send(&app, "POST", "/leaveQueue", Some(json!({"uid": "ghost", "game": "chess"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_check_match_unknown_game() {
        let app = app();
        let (status, _) = send(&app, "POST", "/checkMatch", Some(json!({"uid": "a", "game": "chess"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_searching_by_game_unknown() {
        let app = app();
        let (status, _) = send(&app, "POST", "/searchingByGame", Some(json!({"game": "chess"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats_lists_every_game() {
        let app = app();
        send(&app, "POST", "/joinQueue", Some(json!({
            "uid": "a", "game": "deadlock", "params": {"rank": "ORACLE"}, "ignored": ["b"]
        }))).await;

        let (status, body) = send(&app, "GET", "/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], json!(1));
        assert_eq!(body["games"]["deadlock"], json!(1));
        assert_eq!(body["games"]["pubg"], json!(0));
    }
}
