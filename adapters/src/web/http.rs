use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use domain::ConnectionId;

use super::state::AppState;

#[derive(Serialize)]
pub struct GetQueueResponse {
    waiting: Vec<ConnectionId>,
    count: usize,
}

pub async fn get_queue(State(state): State<Arc<AppState>>) -> Json<GetQueueResponse> {
    let matchmaking = state.matchmaking_service.lock().await;
    let waiting = matchmaking.waiting().await;
    let count = waiting.len();
    Json(GetQueueResponse { waiting, count })
}
