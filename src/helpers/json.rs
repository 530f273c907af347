use actix_web::http::StatusCode;
use actix_web::web::Json;
use actix_web::{Error, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;

/// Acknowledgement body the storefront front-end expects after a write:
/// `{"success": true, "message": "...", "id": 3}`.
#[derive(Serialize)]
pub(crate) struct JsonResponse {
    pub(crate) success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<i32>,
}

#[derive(Default)]
pub(crate) struct JsonResponseBuilder {
    id: Option<i32>,
}

impl JsonResponseBuilder {
    pub(crate) fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn ok<M: Into<String>>(self, msg: M) -> Json<JsonResponse> {
        let msg = msg.into();
        Json(JsonResponse {
            success: true,
            message: (!msg.is_empty()).then_some(msg),
            id: self.id,
        })
    }

    pub(crate) fn bad_request<M: Into<String>>(self, msg: M) -> Error {
        JsonError::new(StatusCode::BAD_REQUEST, msg, "Bad request").into()
    }

    pub(crate) fn form_error<M: Into<String>>(self, msg: M) -> Error {
        self.bad_request(msg)
    }

    pub(crate) fn not_found<M: Into<String>>(self, msg: M) -> Error {
        JsonError::new(StatusCode::NOT_FOUND, msg, "Object not found").into()
    }

    pub(crate) fn internal_server_error<M: Into<String>>(self, msg: M) -> Error {
        JsonError::new(StatusCode::INTERNAL_SERVER_ERROR, msg, "Internal Server Error").into()
    }
}

/// Error rendered as `{"error": "..."}`, the only error shape the front-end reads.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct JsonError {
    status: StatusCode,
    message: String,
}

impl JsonError {
    pub(crate) fn new<M: Into<String>>(status: StatusCode, msg: M, fallback: &str) -> Self {
        let msg = msg.into();
        let message = if msg.trim().is_empty() {
            fallback.to_string()
        } else {
            msg
        };

        Self { status, message }
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(json!({ "error": self.message }))
    }
}

impl JsonResponse {
    pub(crate) fn build() -> JsonResponseBuilder {
        JsonResponseBuilder::default()
    }
}
