use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use super::{QuestionFilter, StoreError, StoreResult, TriviaStore};
use crate::domain::{Category, NewQuestion, Question, DEFAULT_CATEGORIES};

/// In-memory store.
///
/// Intended for tests and local runs without PostgreSQL. Enforces the same
/// integrity rules as the database schema.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_category_id: i64,
    last_question_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the standard trivia categories and no questions
    pub fn with_default_categories() -> Self {
        let store = Self::new();
        for kind in DEFAULT_CATEGORIES {
            store.add_category(kind);
        }
        store
    }

    pub fn add_category(&self, kind: &str) -> Category {
        let mut inner = self.inner.write();
        inner.last_category_id += 1;
        let category = Category {
            id: inner.last_category_id,
            kind: kind.to_string(),
        };
        inner.categories.insert(category.id, category.clone());
        category
    }

    pub fn add_question(&self, new_question: NewQuestion) -> StoreResult<Question> {
        let mut inner = self.inner.write();

        if !inner.categories.contains_key(&new_question.category) {
            return Err(StoreError::Constraint(
                "category does not exist".to_string(),
            ));
        }
        if !(1..=5).contains(&new_question.difficulty) {
            return Err(StoreError::Constraint("value out of range".to_string()));
        }

        inner.last_question_id += 1;
        let question = Question {
            id: inner.last_question_id,
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        };
        inner.questions.insert(question.id, question.clone());
        Ok(question)
    }
}

#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.inner.read().categories.values().cloned().collect())
    }

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.inner.read().categories.get(&id).cloned())
    }

    async fn list_questions(&self, filter: &QuestionFilter) -> StoreResult<Vec<Question>> {
        Ok(self
            .inner
            .read()
            .questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.inner.read().questions.get(&id).cloned())
    }

    async fn count_questions(&self) -> StoreResult<usize> {
        Ok(self.inner.read().questions.len())
    }

    async fn insert_question(&self, new_question: NewQuestion) -> StoreResult<Question> {
        self.add_question(new_question)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        Ok(self.inner.write().questions.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
