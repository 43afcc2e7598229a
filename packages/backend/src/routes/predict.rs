use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use bytes::Bytes;
use nvld_algo::DifficultyResult;
use serde::Deserialize;

use crate::response::AppError;
use crate::state::AppState;

/// Both fields are required; there is no silent default grade or time.
#[derive(Debug, Deserialize)]
pub struct PredictParams {
    grade: i64,
    time_taken: i64,
}

pub async fn predict_query(
    State(state): State<AppState>,
    params: Result<Query<PredictParams>, QueryRejection>,
) -> Result<Json<DifficultyResult>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    Ok(Json(recommend(&state, params)))
}

pub async fn predict_body(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DifficultyResult>, AppError> {
    let params: PredictParams = serde_json::from_slice(&body)
        .map_err(|err| AppError::validation(format!("Invalid request body: {err}")))?;
    Ok(Json(recommend(&state, params)))
}

fn recommend(state: &AppState, params: PredictParams) -> DifficultyResult {
    let result = state.advisor().recommend(params.grade, params.time_taken);
    tracing::debug!(
        grade = params.grade,
        time_taken = params.time_taken,
        adjusted_grade = result.adjusted_grade,
        "difficulty recommended"
    );
    result
}
