//! Category routes

use axum::extract::State;
use std::sync::Arc;

use crate::api::Success;
use crate::app::AppState;
use crate::domain::CategoriesPayload;
use crate::error::ApiResult;

/// GET /categories
///
/// All categories ordered by id.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Success<CategoriesPayload>> {
    let categories = state.store.list_categories().await?;

    tracing::debug!(count = categories.len(), "Listing categories");

    Ok(Success::new(CategoriesPayload { categories }))
}
