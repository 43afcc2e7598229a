#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use nvld_algo::{DifficultyAdvisor, DifficultyPolicy, EmojiTable, QuizGenerator, WordBank};
use nvld_backend::auth::BcryptHasher;
use nvld_backend::db::{MemoryStore, RecordStore};
use nvld_backend::state::AppState;
use serde_json::Value;

pub const TEST_SEED: u64 = 42;

pub fn create_test_app() -> Router {
    nvld_backend::create_app(test_state())
}

pub fn test_state() -> AppState {
    let store = Arc::new(MemoryStore::new());
    let quiz = QuizGenerator::new(
        Arc::new(WordBank::builtin()),
        Arc::new(EmojiTable::builtin()),
    );

    AppState::new(
        DifficultyAdvisor::new(DifficultyPolicy::quick_check()),
        quiz,
        Arc::clone(&store) as Arc<dyn RecordStore>,
        store,
        Arc::new(BcryptHasher::new(4)),
    )
    .with_quiz_seed(Some(TEST_SEED))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
