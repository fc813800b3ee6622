//! Extractors whose rejections become JSON [`ApiError`]s instead of plain-text bodies

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON body. Unparsable input is 400, a mismatched shape is 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters. A segment that doesn't parse names no resource, so 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string. Unparsable values are 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
