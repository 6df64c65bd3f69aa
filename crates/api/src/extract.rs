//! Request extractors that route framework rejections through [`AppError`].
//!
//! Axum's default `Json`/`Query` extractors answer malformed input on their
//! own, with a plain-text body. These wrappers declare [`AppError`] as the
//! rejection instead, so a bad request body or query string produces the
//! same `{ code, message, values }` problem-details shape as every other
//! failure.

use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor; malformed or missing fields become a 400.
///
/// Also usable as a response, delegating to [`axum::Json`].
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Query string extractor; unparseable parameters become a 400.
#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
