use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Uploaded {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct UploadedMany {
    pub urls: Vec<String>,
}

/// Store the multipart field `file`.
#[utoipa::path(
    post, path = "/api/v1/media/upload", tag = "media",
    request_body(content = crate::openapi::UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stored", body = crate::openapi::UploadedDoc),
        (status = 400, description = "No file field")
    )
)]
pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Result<Json<Uploaded>, JsonApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await?;
        let url = state.media.save(file_name.as_deref(), &bytes).await?;
        return Ok(Json(Uploaded { url }));
    }
    Err(JsonApiError::bad_request("multipart field `file` is required"))
}

/// Store every multipart field named `files`, in order.
#[utoipa::path(
    post, path = "/api/v1/media/upload-multiple", tag = "media",
    request_body(content = crate::openapi::UploadManyForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stored", body = crate::openapi::UploadedManyDoc),
        (status = 400, description = "No files field")
    )
)]
pub async fn upload_multiple(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadedMany>, JsonApiError> {
    let mut urls = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("files") {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await?;
        urls.push(state.media.save(file_name.as_deref(), &bytes).await?);
    }
    if urls.is_empty() {
        return Err(JsonApiError::bad_request("multipart field `files` is required"));
    }
    info!(count = urls.len(), "files uploaded");
    Ok(Json(UploadedMany { urls }))
}
