//! Quiz routes

use axum::extract::State;
use std::sync::Arc;

use crate::api::{ApiJson, Success};
use crate::app::AppState;
use crate::domain::{pick_question, QuizCategory, QuizPayload, QuizRequest};
use crate::error::{ApiError, ApiResult};
use crate::store::QuestionFilter;

/// POST /quizzes
///
/// Random question from the chosen category that hasn't been shown yet,
/// or `question: null` once every candidate has been played.
pub async fn next_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> ApiResult<Success<QuizPayload>> {
    let filter = match req.category()? {
        QuizCategory::All => QuestionFilter::all(),
        QuizCategory::Category(id) => {
            if state.store.find_category(id).await?.is_none() {
                return Err(ApiError::not_found(format!("category {id}")));
            }
            QuestionFilter::in_category(id)
        }
    };

    let candidates = state.store.list_questions(&filter).await?;
    let candidate_count = candidates.len();

    let question = {
        let mut rng = state.quiz_rng.lock();
        pick_question(candidates, &req.previous_questions, &mut *rng)
    };

    tracing::debug!(
        category = ?filter.category,
        candidate_count,
        previous = req.previous_questions.len(),
        question_id = ?question.as_ref().map(|q| q.id),
        "Drew quiz question"
    );

    Ok(Success::new(QuizPayload { question }))
}
