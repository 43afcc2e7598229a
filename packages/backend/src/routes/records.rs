use axum::extract::{Path, State};
use axum::Json;
use bytes::Bytes;
use nvld_algo::VocabularyRecord;
use serde::Serialize;

use super::MessageResponse;
use crate::response::AppError;
use crate::services::record::{self, UserReport};
use crate::state::AppState;

#[derive(Serialize)]
pub(crate) struct CreatedData {
    id: usize,
}

pub async fn list_records(State(state): State<AppState>) -> Json<Vec<VocabularyRecord>> {
    Json(state.records().list_all())
}

pub async fn create_record(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse<CreatedData>>, AppError> {
    let payload = record::parse_record(&body)?;
    let id = record::create_record(state.records(), payload);

    Ok(Json(MessageResponse {
        message: "Record created successfully",
        data: CreatedData { id },
    }))
}

pub async fn user_records(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<UserReport> {
    Json(record::user_report(state.records(), &user_id))
}
