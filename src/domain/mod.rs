//! Domain types and DTOs
//!
//! Entities as stored, request bodies with their validation, and the payloads
//! each endpoint returns inside the success envelope.

pub mod categories;
pub mod questions;
pub mod quizzes;

// Re-export commonly used types
pub use categories::*;
pub use questions::*;
pub use quizzes::*;

use serde::Deserialize;

/// Integer that clients may send either as a JSON number or as a numeric string
/// (form values from the web client arrive as strings).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Number(i64),
    Text(String),
}

impl LooseInt {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}
