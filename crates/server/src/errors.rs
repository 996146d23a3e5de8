use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use models::errors::ModelError;
use service::errors::ServiceError;

/// Error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.title, detail: self.detail.as_deref() };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => {
                warn!(error = %msg, "request rejected");
                Self::bad_request(msg)
            }
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::StoreUnavailable(msg) => {
                error!(error = %msg, "store unavailable");
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable", Some(msg))
            }
            other => {
                error!(error = %other, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(other.to_string()))
            }
        }
    }
}

// 请求体不合法（语法、未知字段、缺少 id）统一按 400 返回
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<MultipartError> for JsonApiError {
    fn from(e: MultipartError) -> Self {
        Self::new(e.status(), "Upload Error", Some(e.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Model(ModelError::required("id")), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound("User not found".into()), StatusCode::NOT_FOUND),
            (ServiceError::StoreUnavailable("pool timed out".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ServiceError::Db("syntax error".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn decode_errors_are_internal() {
        let err = ServiceError::Model(ModelError::Decode { field: "title", message: "expected string".into() });
        assert_eq!(JsonApiError::from(err).status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
