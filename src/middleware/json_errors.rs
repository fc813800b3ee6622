//! JSON bodies for the errors axum produces on its own

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Router fallback for paths no route matches
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("")
}

/// Replace the empty 405 a method router returns with the JSON error body.
/// The `Allow` header is kept.
pub async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}
