//! Question routes
//!
//! Listing, search, per-category listing, creation and deletion.

use axum::extract::State;
use std::sync::Arc;

use crate::api::{paginate, ApiJson, ApiPath, ApiQuery, Created, PageParams, Success};
use crate::app::AppState;
use crate::domain::{
    CategoryQuestionsPayload, CreateQuestionRequest, CreatedPayload, DeletedPayload,
    QuestionListPayload, SearchPayload, SearchRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::store::QuestionFilter;

/// GET /questions?page=N
///
/// One page of all questions plus every category.
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> ApiResult<Success<QuestionListPayload>> {
    let page = params.page()?;

    let questions = state.store.list_questions(&QuestionFilter::all()).await?;
    let total_questions = questions.len();
    let questions = paginate(questions, page);

    if questions.is_empty() {
        return Err(ApiError::not_found(format!("page {page} has no questions")));
    }

    let categories = state.store.list_categories().await?;

    tracing::debug!(page, total_questions, "Listing questions");

    Ok(Success::new(QuestionListPayload {
        questions,
        total_questions,
        categories,
        current_category: None,
    }))
}

/// DELETE /questions/:question_id
///
/// Delete a question and return the refreshed first page.
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    ApiPath(question_id): ApiPath<i64>,
) -> ApiResult<Success<DeletedPayload>> {
    if state.store.find_question(question_id).await?.is_none() {
        return Err(ApiError::not_found(format!("question {question_id}")));
    }

    let deleted = state
        .store
        .delete_question(question_id)
        .await
        .map_err(|e| ApiError::write_failed("delete question", e))?;

    // Lost a race with a concurrent delete
    if !deleted {
        return Err(ApiError::not_found(format!("question {question_id}")));
    }

    tracing::info!(question_id, "Deleted question");

    let questions = state.store.list_questions(&QuestionFilter::all()).await?;
    let total_questions = questions.len();

    Ok(Success::new(DeletedPayload {
        deleted: question_id,
        questions: paginate(questions, 1),
        total_questions,
    }))
}

/// POST /questions
///
/// Validate and store a new question.
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> ApiResult<Created<CreatedPayload>> {
    let new_question = req.validate()?;

    let question = state
        .store
        .insert_question(new_question)
        .await
        .map_err(|e| ApiError::write_failed("create question", e))?;

    tracing::info!(
        question_id = question.id,
        category = question.category,
        difficulty = question.difficulty,
        "Created question"
    );

    let total_questions = state.store.count_questions().await?;

    Ok(Created(CreatedPayload {
        created: question.id,
        total_questions,
    }))
}

/// POST /questions/search?page=N
///
/// Case-insensitive substring search over question text.
pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PageParams>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> ApiResult<Success<SearchPayload>> {
    let page = params.page()?;
    let term = req.term()?;

    let questions = state
        .store
        .list_questions(&QuestionFilter::matching(term.clone()))
        .await?;
    let total_questions = questions.len();
    let questions = paginate(questions, page);

    tracing::debug!(search_term = %term, page, total_questions, "Searching questions");

    let Some(first) = questions.first() else {
        return Err(ApiError::not_found(format!("no questions match '{term}'")));
    };

    let current_category = state
        .store
        .find_category(first.category)
        .await?
        .map(|c| c.kind);

    Ok(Success::new(SearchPayload {
        questions,
        total_questions,
        current_category,
    }))
}

/// GET /categories/:category_id/questions?page=N
///
/// One page of the questions in a category.
pub async fn list_questions_by_category(
    State(state): State<Arc<AppState>>,
    ApiPath(category_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> ApiResult<Success<CategoryQuestionsPayload>> {
    let page = params.page()?;

    let category = state
        .store
        .find_category(category_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("category {category_id}")))?;

    let questions = state
        .store
        .list_questions(&QuestionFilter::in_category(category_id))
        .await?;
    let total_questions = questions.len();
    let questions = paginate(questions, page);

    if questions.is_empty() {
        return Err(ApiError::not_found(format!(
            "page {page} of category {category_id} has no questions"
        )));
    }

    let categories = state.store.list_categories().await?;

    tracing::debug!(category_id, page, total_questions, "Listing questions by category");

    Ok(Success::new(CategoryQuestionsPayload {
        questions,
        total_questions,
        categories,
        current_category: category.kind,
    }))
}
