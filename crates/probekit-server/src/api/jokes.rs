use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::app_state::AppState;

pub const JOKES: [&str; 5] = [
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "A SQL query walks into a bar, goes up to two tables and asks: may I join you?",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I would tell you a UDP joke, but you might not get it.",
    "It works on my machine. Then we'll ship your machine.",
];

/// `GET /joke`: next joke in round-robin order, shared across clients.
pub async fn joke(State(state): State<AppState>) -> impl IntoResponse {
    let id = state.next_joke_index() % JOKES.len();
    Json(json!({ "id": id, "joke": JOKES[id] }))
}

/// `GET /teapot`
pub async fn teapot() -> impl IntoResponse {
    (
        StatusCode::IM_A_TEAPOT,
        Json(json!({ "status": "teapot", "message": "I'm a teapot" })),
    )
}
