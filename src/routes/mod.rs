pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Categories
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(questions::list_questions_by_category),
        )
        // Questions
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/:question_id", delete(questions::delete_question))
        // Quiz
        .route("/quizzes", post(quizzes::next_question))
}
