mod auth;
mod health;
mod ocr;
mod predict;
mod records;
mod vocabulary;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::response::json_error;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home).fallback(fallback_handler))
        .route("/register", post(auth::register).fallback(fallback_handler))
        .route("/login", post(auth::login).fallback(fallback_handler))
        .route(
            "/predict",
            get(predict::predict_query)
                .post(predict::predict_body)
                .fallback(fallback_handler),
        )
        .route(
            "/vocabulary-records",
            get(records::list_records)
                .post(records::create_record)
                .fallback(fallback_handler),
        )
        .route(
            "/vocabulary-records/user/:user_id",
            get(records::user_records).fallback(fallback_handler),
        )
        .route(
            "/vocabulary-levels",
            get(vocabulary::levels).fallback(fallback_handler),
        )
        .route(
            "/vocabulary-quiz/:level",
            get(vocabulary::quiz).fallback(fallback_handler),
        )
        .route(
            "/api/recognize-word-ocr",
            post(ocr::recognize_word).fallback(fallback_handler),
        )
        .nest("/health", health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

#[derive(Serialize)]
struct HomeResponse {
    message: &'static str,
    endpoints: [&'static str; 7],
}

async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the NVLD Vocabulary Learning API",
        endpoints: [
            "/register - Register a new user",
            "/login - User login",
            "/predict - Get difficulty level prediction",
            "/vocabulary-records - Store and retrieve vocabulary records",
            "/vocabulary-levels - Get vocabulary levels and themes",
            "/vocabulary-quiz - Get vocabulary quiz questions",
            "/api/recognize-word-ocr - Recognize a handwritten word",
        ],
    })
}

#[derive(Serialize)]
pub(crate) struct MessageResponse<T> {
    message: &'static str,
    #[serde(flatten)]
    data: T,
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Endpoint not found").into_response()
}
