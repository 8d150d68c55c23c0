//! Submit-eligibility rules
//!
//! A form may be submitted once enough of its questions are complete. Other
//! questions may stay incomplete; they are still serialized.

use serde::Serialize;
use thiserror::Error;

use crate::constants::{
    form::{MIN_COMPLETE_QUESTIONS, REJECTION_MESSAGE},
    multiple_choice::MIN_OPTION_COUNT,
};

use super::question::{Question, QuestionKind};

/// Returned when a submission is refused because too few questions are complete
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", REJECTION_MESSAGE)]
pub struct Rejection {
    /// Number of complete questions at the time of the attempt
    pub complete: usize,
}

/// Whether a question has text and, for multiple choice, enough filled options
pub fn is_complete(question: &Question) -> bool {
    !question.text().is_empty()
        && match question.kind() {
            QuestionKind::TextArea => true,
            QuestionKind::MultipleChoice => {
                question.filled_options().count() >= MIN_OPTION_COUNT
            }
        }
}

/// Counts the complete questions anywhere in the list
pub fn complete_count(questions: &[Question]) -> usize {
    questions.iter().filter(|q| is_complete(q)).count()
}

/// Whether the list holds at least two complete questions
pub fn is_submittable(questions: &[Question]) -> bool {
    complete_count(questions) >= MIN_COMPLETE_QUESTIONS
}

/// Checks submit-eligibility, describing the refusal on failure
///
/// # Errors
///
/// Returns a [`Rejection`] when fewer than two questions are complete.
pub fn check(questions: &[Question]) -> Result<(), Rejection> {
    let complete = complete_count(questions);
    if complete >= MIN_COMPLETE_QUESTIONS {
        Ok(())
    } else {
        Err(Rejection { complete })
    }
}
