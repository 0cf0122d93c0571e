//! Knowledge-check questions.

use serde::{Deserialize, Serialize};

use crate::error::LabError;

pub(crate) const QUESTIONS_JSON: &str = include_str!("../../data/questions.json");

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

/// One single-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index of the correct option.
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }

    /// Option letter shown next to each answer (`0 → 'A'`).
    pub fn option_letter(option: usize) -> char {
        (b'A' + (option % 26) as u8) as char
    }

    pub fn validate(&self) -> Result<(), LabError> {
        if self.options.len() != OPTION_COUNT {
            return Err(LabError::Catalog(format!(
                "question {}: expected {} options, found {}",
                self.id,
                OPTION_COUNT,
                self.options.len()
            )));
        }
        if self.correct_answer >= self.options.len() {
            return Err(LabError::Catalog(format!(
                "question {}: correct answer {} is not an option",
                self.id, self.correct_answer
            )));
        }
        Ok(())
    }
}

pub(crate) fn parse_questions(json: &str) -> Result<Vec<QuizQuestion>, LabError> {
    let questions: Vec<QuizQuestion> = serde_json::from_str(json)
        .map_err(|e| LabError::Catalog(format!("questions: {e}")))?;
    for q in &questions {
        q.validate()?;
    }
    Ok(questions)
}
