//! Request-body extraction.
//!
//! A payload that fails to decode is a validation problem like any other,
//! so it must come back as a 400 from the shared error taxonomy rather
//! than axum's default 422 rejection.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`].
///
/// Extraction failures (unparseable JSON, missing required fields, unknown
/// fields on `deny_unknown_fields` bodies) are converted to
/// [`AppError::BadRequest`] before the handler runs. Serializing responses
/// works the same as with `axum::Json`.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
