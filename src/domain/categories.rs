use serde::{Deserialize, Serialize};

use super::Question;

/// Categories seeded by the initial migration, in id order
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// `GET /categories`
#[derive(Debug, Serialize)]
pub struct CategoriesPayload {
    pub categories: Vec<Category>,
}

/// `GET /categories/:id/questions`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsPayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_category: String,
}
