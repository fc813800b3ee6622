//! Data access for questions and categories
//!
//! Handlers only talk to [`TriviaStore`]. PostgreSQL backs it in deployments,
//! the in-memory store backs tests and database-less local runs.

mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;

use crate::domain::{Category, NewQuestion, Question};

/// Store failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The write would break an integrity rule (unknown category, bad difficulty)
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Self::Constraint("category does not exist".to_string())
            }
            sqlx::Error::Database(db) if db.is_check_violation() => {
                Self::Constraint("value out of range".to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::Unavailable(err.to_string())
            }
            _ => Self::Database(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Filter applied to question scans. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<i64>,
    /// Case-insensitive substring of the question text
    pub search: Option<String>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_category(category: i64) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn matching(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        if let Some(category) = self.category {
            if question.category != category {
                return false;
            }
        }

        match &self.search {
            Some(term) => question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        }
    }
}

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// Questions matching `filter`, ordered by id.
    async fn list_questions(&self, filter: &QuestionFilter) -> StoreResult<Vec<Question>>;

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>>;

    async fn count_questions(&self) -> StoreResult<usize>;

    /// Insert atomically and return the stored question with its new id.
    async fn insert_question(&self, new_question: NewQuestion) -> StoreResult<Question>;

    /// Delete atomically. Returns false when no question had that id.
    async fn delete_question(&self, id: i64) -> StoreResult<bool>;

    /// Cheap connectivity probe.
    async fn ping(&self) -> StoreResult<()>;
}
