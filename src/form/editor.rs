//! Question list editing
//!
//! [`QuestionListEditor`] owns the ordered list of questions being built.
//! Every edit leaves the receiver untouched and returns the next snapshot,
//! so a UI layer can keep old snapshots around (for undo, diffing, or
//! re-rendering) without any shared mutable state.
//!
//! Each edit comes in two forms: a `try_*` method that reports why an edit
//! was refused, and a plain method that treats a refused edit as a no-op and
//! hands back an unchanged snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::{EditorConfig, IdPolicy},
    constants::multiple_choice::MIN_OPTION_COUNT,
};

use super::{
    document::{self, Document},
    question::{Question, QuestionId, QuestionKind},
    validate::{self, Rejection},
};

/// Reasons an edit is refused
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No question exists at the given index
    #[error("no question at index {0}")]
    QuestionOutOfRange(usize),
    /// The question has no option at the given index
    #[error("question {question} has no option at index {option}")]
    OptionOutOfRange {
        /// Index of the question
        question: usize,
        /// Index of the missing option
        option: usize,
    },
    /// The only remaining question cannot be removed
    #[error("the last question cannot be removed")]
    LastQuestion,
    /// The question already holds the maximum number of options
    #[error("a question holds at most {0} options")]
    TooManyOptions(usize),
    /// Removing the option would leave too few options
    #[error("a multiple choice question needs at least {0} options")]
    TooFewOptions(usize),
    /// Options only exist on multiple choice questions
    #[error("question {0} is not multiple choice")]
    NotMultipleChoice(usize),
    /// Every question id has been handed out
    #[error("no question ids left")]
    IdsExhausted,
}

/// A single edit, as sent by a UI layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edit {
    /// Append a blank multiple choice question
    AddQuestion,
    /// Remove the question at an index
    RemoveQuestion(usize),
    /// Change the kind of a question, resetting its options
    SetQuestionType {
        /// Index of the question
        index: usize,
        /// New kind
        kind: QuestionKind,
    },
    /// Replace the text of a question
    SetQuestionText {
        /// Index of the question
        index: usize,
        /// New text
        text: String,
    },
    /// Append a blank option to a question
    AddOption(usize),
    /// Remove an option from a question
    RemoveOption {
        /// Index of the question
        index: usize,
        /// Index of the option
        option: usize,
    },
    /// Replace the text of an option
    SetOptionText {
        /// Index of the question
        index: usize,
        /// Index of the option
        option: usize,
        /// New text
        text: String,
    },
}

/// The list of questions that makes up a form under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListEditor {
    questions: Vec<Question>,
    /// Next id handed out under [`IdPolicy::Monotonic`]
    next_id: u32,
    config: EditorConfig,
}

impl Default for QuestionListEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl QuestionListEditor {
    /// Creates an editor seeded with one blank multiple choice question
    pub fn new(config: EditorConfig) -> Self {
        Self {
            questions: vec![Question::new(QuestionId::from(1))],
            next_id: 2,
            config,
        }
    }

    /// The questions in order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question at an index, if any
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The configuration this editor was created with
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the editor holds no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Applies an edit message
    ///
    /// # Errors
    ///
    /// Returns the refusal reported by the matching `try_*` method.
    pub fn apply(&self, edit: Edit) -> Result<Self, Error> {
        match edit {
            Edit::AddQuestion => self.try_add_question(),
            Edit::RemoveQuestion(index) => self.try_remove_question(index),
            Edit::SetQuestionType { index, kind } => self.try_set_question_type(index, kind),
            Edit::SetQuestionText { index, text } => self.try_set_question_text(index, text),
            Edit::AddOption(index) => self.try_add_option(index),
            Edit::RemoveOption { index, option } => self.try_remove_option(index, option),
            Edit::SetOptionText {
                index,
                option,
                text,
            } => self.try_set_option_text(index, option, text),
        }
    }

    /// Appends a blank multiple choice question
    ///
    /// # Errors
    ///
    /// * `Error::IdsExhausted` - the monotonic id counter has run out
    pub fn try_add_question(&self) -> Result<Self, Error> {
        let mut next = self.clone();
        let id = match self.config.id_policy {
            IdPolicy::Monotonic => {
                next.next_id = self.next_id.checked_add(1).ok_or(Error::IdsExhausted)?;
                self.next_id
            }
            IdPolicy::Positional => u32::try_from(self.len() + 1).unwrap_or(u32::MAX),
        };
        next.questions.push(Question::new(QuestionId::from(id)));
        Ok(next)
    }

    /// Appends a blank multiple choice question; a no-op when refused
    pub fn add_question(&self) -> Self {
        self.or_unchanged(self.try_add_question())
    }

    /// Removes a question, refusing to remove the last one
    ///
    /// # Errors
    ///
    /// * `Error::QuestionOutOfRange` - no question at `index`
    /// * `Error::LastQuestion` - only one question remains
    pub fn try_remove_question(&self, index: usize) -> Result<Self, Error> {
        if index >= self.len() {
            return Err(Error::QuestionOutOfRange(index));
        }
        if self.len() <= 1 {
            return Err(Error::LastQuestion);
        }
        let mut next = self.clone();
        next.questions.remove(index);
        Ok(next)
    }

    /// Removes a question; a no-op when refused
    pub fn remove_question(&self, index: usize) -> Self {
        self.or_unchanged(self.try_remove_question(index))
    }

    /// Changes the kind of a question and resets its options
    ///
    /// # Errors
    ///
    /// * `Error::QuestionOutOfRange` - no question at `index`
    pub fn try_set_question_type(&self, index: usize, kind: QuestionKind) -> Result<Self, Error> {
        self.edit_question(index, |question| {
            question.set_kind(kind);
            Ok(())
        })
    }

    /// Changes the kind of a question; a no-op when refused
    pub fn set_question_type(&self, index: usize, kind: QuestionKind) -> Self {
        self.or_unchanged(self.try_set_question_type(index, kind))
    }

    /// Replaces the text of a question verbatim
    ///
    /// # Errors
    ///
    /// * `Error::QuestionOutOfRange` - no question at `index`
    pub fn try_set_question_text(
        &self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<Self, Error> {
        let text = text.into();
        self.edit_question(index, |question| {
            question.set_text(text);
            Ok(())
        })
    }

    /// Replaces the text of a question; a no-op when refused
    pub fn set_question_text(&self, index: usize, text: impl Into<String>) -> Self {
        self.or_unchanged(self.try_set_question_text(index, text))
    }

    /// Appends a blank option to a multiple choice question
    ///
    /// # Errors
    ///
    /// * `Error::QuestionOutOfRange` - no question at `index`
    /// * `Error::NotMultipleChoice` - the question is a text area
    /// * `Error::TooManyOptions` - the question is already full
    pub fn try_add_option(&self, index: usize) -> Result<Self, Error> {
        let max_options = self.config.option_cap();
        self.edit_question(index, |question| {
            if question.kind() != QuestionKind::MultipleChoice {
                return Err(Error::NotMultipleChoice(index));
            }
            if question.options().len() >= max_options {
                return Err(Error::TooManyOptions(max_options));
            }
            question.options_mut().push(String::new());
            Ok(())
        })
    }

    /// Appends a blank option; a no-op when refused
    pub fn add_option(&self, index: usize) -> Self {
        self.or_unchanged(self.try_add_option(index))
    }

    /// Removes an option from a question
    ///
    /// With [`EditorConfig::enforce_option_minimum`] set, a multiple choice
    /// question never drops below two options.
    ///
    /// # Errors
    ///
    /// * `Error::QuestionOutOfRange` - no question at `index`
    /// * `Error::OptionOutOfRange` - no option at `option`
    /// * `Error::TooFewOptions` - the removal would break the option minimum
    pub fn try_remove_option(&self, index: usize, option: usize) -> Result<Self, Error> {
        let enforce_minimum = self.config.enforce_option_minimum;
        self.edit_question(index, |question| {
            if option >= question.options().len() {
                return Err(Error::OptionOutOfRange {
                    question: index,
                    option,
                });
            }
            if enforce_minimum
                && question.kind() == QuestionKind::MultipleChoice
                && question.options().len() <= MIN_OPTION_COUNT
            {
                return Err(Error::TooFewOptions(MIN_OPTION_COUNT));
            }
            question.options_mut().remove(option);
            Ok(())
        })
    }

    /// Removes an option; a no-op when refused
    pub fn remove_option(&self, index: usize, option: usize) -> Self {
        self.or_unchanged(self.try_remove_option(index, option))
    }

    /// Replaces the text of an option verbatim
    ///
    /// # Errors
    ///
    /// * `Error::QuestionOutOfRange` - no question at `index`
    /// * `Error::OptionOutOfRange` - no option at `option`
    pub fn try_set_option_text(
        &self,
        index: usize,
        option: usize,
        text: impl Into<String>,
    ) -> Result<Self, Error> {
        let text = text.into();
        self.edit_question(index, |question| {
            let slot = question
                .options_mut()
                .get_mut(option)
                .ok_or(Error::OptionOutOfRange {
                    question: index,
                    option,
                })?;
            *slot = text;
            Ok(())
        })
    }

    /// Replaces the text of an option; a no-op when refused
    pub fn set_option_text(&self, index: usize, option: usize, text: impl Into<String>) -> Self {
        self.or_unchanged(self.try_set_option_text(index, option, text))
    }

    /// Whether at least two questions are complete
    pub fn is_submittable(&self) -> bool {
        validate::is_submittable(&self.questions)
    }

    /// Serializes every question, complete or not
    pub fn to_document(&self) -> Document {
        document::serialize(&self.questions)
    }

    /// Validates and serializes the form
    ///
    /// The editor is never changed by a submission, accepted or not.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] when fewer than two questions are complete.
    pub fn submit(&self) -> Result<Document, Rejection> {
        if let Err(rejection) = validate::check(&self.questions) {
            tracing::info!(complete = rejection.complete, "submission rejected");
            return Err(rejection);
        }
        let document = self.to_document();
        tracing::info!(document = %document.to_json(), "form submitted");
        Ok(document)
    }

    fn edit_question<F>(&self, index: usize, edit: F) -> Result<Self, Error>
    where
        F: FnOnce(&mut Question) -> Result<(), Error>,
    {
        if index >= self.len() {
            return Err(Error::QuestionOutOfRange(index));
        }
        let mut next = self.clone();
        edit(&mut next.questions[index])?;
        Ok(next)
    }

    fn or_unchanged(&self, result: Result<Self, Error>) -> Self {
        result.unwrap_or_else(|error| {
            tracing::debug!(%error, "edit refused");
            self.clone()
        })
    }
}
