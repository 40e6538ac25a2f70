//! Request extractors whose rejections use the JSON error body.
//!
//! Axum's stock `Json`, `Query` and `Path` reject with plain-text bodies
//! and, for JSON, status 422. These wrappers route every rejection through
//! [`AppError`] so clients always get `{ "error", "code" }` with 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
