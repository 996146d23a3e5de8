use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::user::{NewUser, User};
use service::user_service;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Get-or-create a Telegram user.
#[utoipa::path(
    post, path = "/api/v1/users/register", tag = "users",
    request_body = crate::openapi::NewUserDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 200, description = "Already registered", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), JsonApiError> {
    let Json(new_user) = payload?;
    if new_user.telegram_id.trim().is_empty() {
        return Err(JsonApiError::bad_request("telegram_id required"));
    }
    let (user, created) = user_service::register(&state.db, new_user).await?;
    if created {
        info!(telegram_id = %user.telegram_id, "new telegram user");
        Ok((StatusCode::CREATED, Json(user)))
    } else {
        Ok((StatusCode::OK, Json(user)))
    }
}

#[utoipa::path(
    get, path = "/api/v1/users/{telegram_id}", tag = "users",
    params(("telegram_id" = String, Path, description = "Telegram user id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::UserDoc),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(telegram_id): Path<String>,
) -> Result<Json<User>, JsonApiError> {
    let user = user_service::get_by_telegram_id(&state.db, &telegram_id).await?;
    Ok(Json(user))
}
