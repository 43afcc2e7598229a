use axum::extract::State;
use axum::Json;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::MessageResponse;
use crate::db::PublicUser;
use crate::response::AppError;
use crate::services::auth::{self, LoginRequest, RegisterRequest};
use crate::state::AppState;

#[derive(Serialize)]
pub(crate) struct UserData {
    user: PublicUser,
}

pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse<UserData>>, AppError> {
    let payload: RegisterRequest = parse_body(&body)?;
    let user = auth::register(state.users(), state.hasher(), payload)?;

    Ok(Json(MessageResponse {
        message: "User registered successfully",
        data: UserData { user },
    }))
}

pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse<UserData>>, AppError> {
    let payload: LoginRequest = parse_body(&body)?;
    let user = auth::login(state.users(), state.hasher(), payload).map_err(|err| {
        tracing::info!(error = %err, "login rejected");
        AppError::from(err)
    })?;

    Ok(Json(MessageResponse {
        message: "Login successful",
        data: UserData { user },
    }))
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|err| AppError::validation(format!("Invalid request body: {err}")))
}
