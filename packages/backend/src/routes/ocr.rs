//! Handwriting recognition stub. Accepts the upload and answers a random
//! word; no OCR happens.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::Json;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::response::AppError;

const STUB_WORDS: [&str; 10] = [
    "apple", "banana", "cat", "dog", "elephant", "fish", "giraffe", "house", "ice", "jacket",
];

#[derive(Serialize)]
pub struct RecognizeResponse {
    recognized_text: &'static str,
}

pub async fn recognize_word(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<RecognizeResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let mut received = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::validation(err.body_text()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|err| AppError::validation(err.body_text()))?;
            received = Some(bytes.len());
            break;
        }
    }

    let Some(size) = received else {
        return Err(AppError::validation("Missing file field"));
    };

    let recognized_text = STUB_WORDS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(STUB_WORDS[0]);
    tracing::debug!(upload_bytes = size, %recognized_text, "ocr stub answered");

    Ok(Json(RecognizeResponse { recognized_text }))
}
