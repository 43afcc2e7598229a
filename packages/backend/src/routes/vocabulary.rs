use std::collections::BTreeMap;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use nvld_algo::{LevelSummary, QuizOptions, QuizSet, DEFAULT_QUIZ_SIZE};
use serde::Deserialize;

use crate::response::AppError;
use crate::state::AppState;

const MAX_QUIZ_SIZE: usize = 50;

#[derive(Debug, Default, Deserialize)]
pub struct QuizParams {
    #[serde(default)]
    count: Option<usize>,
    /// Ask each word at most once
    #[serde(default)]
    distinct: Option<bool>,
}

pub async fn levels(State(state): State<AppState>) -> Json<BTreeMap<String, LevelSummary>> {
    Json(state.quiz().levels())
}

pub async fn quiz(
    State(state): State<AppState>,
    Path(level): Path<String>,
    params: Result<Query<QuizParams>, QueryRejection>,
) -> Result<Json<QuizSet>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let count = params.count.unwrap_or(DEFAULT_QUIZ_SIZE);
    if !(1..=MAX_QUIZ_SIZE).contains(&count) {
        return Err(AppError::validation(format!(
            "count must be between 1 and {MAX_QUIZ_SIZE}"
        )));
    }

    let options = QuizOptions {
        count,
        distinct_targets: params.distinct.unwrap_or(false),
    };

    let mut rng = state.quiz_rng();
    let set = state
        .quiz()
        .generate(&level, options, &mut *rng)
        .map_err(|err| {
            tracing::info!(%level, error = %err, "quiz generation refused");
            AppError::from(err)
        })?;

    Ok(Json(set))
}
