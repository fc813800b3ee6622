use serde::{Deserialize, Serialize};

use super::{Category, LooseInt};
use crate::error::{ApiError, ApiResult};

/// Question entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// Validated question ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// Request DTO for creating a question
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<LooseInt>,
    #[serde(default)]
    pub difficulty: Option<LooseInt>,
}

impl CreateQuestionRequest {
    pub fn validate(self) -> ApiResult<NewQuestion> {
        let question = required_text("question", self.question)?;
        let answer = required_text("answer", self.answer)?;

        let category = self
            .category
            .as_ref()
            .ok_or_else(|| ApiError::unprocessable("category is required"))?
            .as_i64()
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::unprocessable("category must be a positive integer id"))?;

        let difficulty = self
            .difficulty
            .as_ref()
            .ok_or_else(|| ApiError::unprocessable("difficulty is required"))?
            .as_i64()
            .filter(|d| (1..=5).contains(d))
            .ok_or_else(|| ApiError::unprocessable("difficulty must be an integer from 1 to 5"))?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty: difficulty as i32,
        })
    }
}

fn required_text(field: &str, value: Option<String>) -> ApiResult<String> {
    let value = value.ok_or_else(|| ApiError::unprocessable(format!("{field} is required")))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::unprocessable(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

/// Request DTO for question search
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default, alias = "search_term")]
    pub search_term: Option<String>,
}

impl SearchRequest {
    /// The term exactly as sent; surrounding whitespace is part of the match.
    pub fn term(self) -> ApiResult<String> {
        self.search_term
            .ok_or_else(|| ApiError::unprocessable("searchTerm is required"))
    }
}

/// `GET /questions`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListPayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_category: Option<String>,
}

/// `DELETE /questions/:id`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedPayload {
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// `POST /questions`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPayload {
    pub created: i64,
    pub total_questions: usize,
}

/// `POST /questions/search`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> CreateQuestionRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_complete_payload() {
        let new_question = request(json!({
            "question": "  What is the capital of Peru? ",
            "answer": "Lima",
            "category": 3,
            "difficulty": 2
        }))
        .validate()
        .unwrap();

        assert_eq!(
            new_question,
            NewQuestion {
                question: "What is the capital of Peru?".to_string(),
                answer: "Lima".to_string(),
                category: 3,
                difficulty: 2,
            }
        );
    }

    #[test]
    fn accepts_numeric_strings_from_forms() {
        let new_question = request(json!({
            "question": "Q",
            "answer": "A",
            "category": "5",
            "difficulty": "4"
        }))
        .validate()
        .unwrap();

        assert_eq!(new_question.category, 5);
        assert_eq!(new_question.difficulty, 4);
    }

    #[test]
    fn every_field_is_required() {
        let complete = json!({
            "question": "Q",
            "answer": "A",
            "category": 1,
            "difficulty": 1
        });

        for field in ["question", "answer", "category", "difficulty"] {
            let mut body = complete.clone();
            body.as_object_mut().unwrap().remove(field);
            let err = request(body).validate().unwrap_err();
            assert!(
                matches!(err, ApiError::Unprocessable(ref msg) if msg.contains(field)),
                "missing {field} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_blank_text_and_bad_ranges() {
        let cases = [
            json!({"question": "   ", "answer": "A", "category": 1, "difficulty": 1}),
            json!({"question": "Q", "answer": "A", "category": 0, "difficulty": 1}),
            json!({"question": "Q", "answer": "A", "category": "science", "difficulty": 1}),
            json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 6}),
            json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 0}),
        ];

        for body in cases {
            assert!(request(body.clone()).validate().is_err(), "{body} passed");
        }
    }

    #[test]
    fn search_term_is_required() {
        let req: SearchRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.term().is_err());

        let req: SearchRequest = serde_json::from_value(json!({"search_term": "Title"})).unwrap();
        assert_eq!(req.term().unwrap(), "Title");

        let req: SearchRequest = serde_json::from_value(json!({"searchTerm": " is "})).unwrap();
        assert_eq!(req.term().unwrap(), " is ");
    }

    #[test]
    fn category_serializes_label_as_type() {
        let category = Category {
            id: 1,
            kind: "Science".to_string(),
        };
        assert_eq!(
            serde_json::to_value(category).unwrap(),
            json!({"id": 1, "type": "Science"})
        );
    }
}
