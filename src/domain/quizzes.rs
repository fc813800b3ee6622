use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{LooseInt, Question};
use crate::error::{ApiError, ApiResult};

/// Keyword selecting questions from every category
pub const ALL_CATEGORIES: &str = "all";

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(i64),
}

/// `quizCategory` as sent by clients: `"all"`, an id, or a category object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuizCategoryInput {
    Value(LooseInt),
    Object { id: LooseInt },
}

impl QuizCategoryInput {
    pub fn resolve(&self) -> ApiResult<QuizCategory> {
        let value = match self {
            Self::Value(v) | Self::Object { id: v } => v,
        };

        if let LooseInt::Text(s) = value {
            if s.trim().eq_ignore_ascii_case(ALL_CATEGORIES) {
                return Ok(QuizCategory::All);
            }
        }

        value
            .as_i64()
            .filter(|id| *id > 0)
            .map(QuizCategory::Category)
            .ok_or_else(|| {
                ApiError::unprocessable("quizCategory must be \"all\" or a positive category id")
            })
    }
}

/// Request DTO for the next quiz question
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[serde(default, alias = "previous_questions")]
    pub previous_questions: Vec<i64>,
    #[serde(default, alias = "quiz_category")]
    pub quiz_category: Option<QuizCategoryInput>,
}

impl QuizRequest {
    pub fn category(&self) -> ApiResult<QuizCategory> {
        self.quiz_category
            .as_ref()
            .ok_or_else(|| ApiError::unprocessable("quizCategory is required"))?
            .resolve()
    }
}

/// `POST /quizzes`. `question` is null once the quiz is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizPayload {
    pub question: Option<Question>,
}

/// Draw one question uniformly from `candidates`, skipping ids already shown.
pub fn pick_question<R>(candidates: Vec<Question>, previous: &[i64], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let mut remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let idx = rng.gen_range(0..remaining.len());
    Some(remaining.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::json;

    fn questions(ids: &[i64]) -> Vec<Question> {
        ids.iter()
            .map(|&id| Question {
                id,
                question: format!("Question {id}?"),
                answer: format!("Answer {id}"),
                category: 1,
                difficulty: 1,
            })
            .collect()
    }

    fn parse(body: serde_json::Value) -> QuizRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn never_repeats_previous_questions() {
        let mut rng = StdRng::seed_from_u64(42);
        let previous = [1, 2, 3, 5, 8];

        for _ in 0..200 {
            let picked = pick_question(questions(&[1, 2, 3, 4, 5, 6, 7, 8]), &previous, &mut rng)
                .expect("three questions remain");
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn exhausted_quiz_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_question(questions(&[1, 2]), &[2, 1], &mut rng).is_none());
        assert!(pick_question(Vec::new(), &[], &mut rng).is_none());
    }

    #[test]
    fn draws_cover_every_remaining_question() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let q = pick_question(questions(&[10, 11, 12, 13]), &[11], &mut rng).unwrap();
            seen.insert(q.id);
        }
        assert_eq!(seen, HashSet::from([10, 12, 13]));
    }

    #[test]
    fn same_seed_same_sequence() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| pick_question(questions(&[1, 2, 3, 4, 5]), &[], &mut rng).unwrap().id)
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(3), draw(3));
    }

    #[test]
    fn category_encodings() {
        let cases = [
            (json!("all"), QuizCategory::All),
            (json!("ALL"), QuizCategory::All),
            (json!(4), QuizCategory::Category(4)),
            (json!("4"), QuizCategory::Category(4)),
            (json!({"id": 2, "type": "Art"}), QuizCategory::Category(2)),
            (json!({"id": "all"}), QuizCategory::All),
        ];

        for (category, expected) in cases {
            let req = parse(json!({"previousQuestions": [], "quizCategory": category}));
            assert_eq!(req.category().unwrap(), expected);
        }
    }

    #[test]
    fn zero_is_not_a_sentinel() {
        for category in [json!(0), json!({"id": 0, "type": "click"}), json!("sports"), json!(-3)] {
            let req = parse(json!({"quizCategory": category}));
            assert!(req.category().is_err(), "{category} accepted");
        }
    }

    #[test]
    fn missing_category_is_rejected() {
        let req = parse(json!({"previousQuestions": [1, 2]}));
        assert_eq!(req.previous_questions, vec![1, 2]);
        assert!(req.category().is_err());
    }

    #[test]
    fn snake_case_aliases() {
        let req = parse(json!({"previous_questions": [7], "quiz_category": "all"}));
        assert_eq!(req.previous_questions, vec![7]);
        assert_eq!(req.category().unwrap(), QuizCategory::All);
    }
}
