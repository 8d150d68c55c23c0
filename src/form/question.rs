//! Question records held by the editor
//!
//! A question is either multiple choice, carrying an ordered list of option
//! strings, or a free text area with no options at all.

use serde::{Deserialize, Serialize};

use crate::constants::multiple_choice::DEFAULT_OPTION_COUNT;

/// Identifier attached to a question when it is created
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Returns the raw numeric value of the id
    pub fn get(self) -> u32 {
        self.0
    }
}

/// The kind of a question, which decides how it is answered
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum QuestionKind {
    /// Multiple choice: the respondent picks one of the options
    #[default]
    #[serde(rename = "MCQ")]
    #[display("MCQ")]
    MultipleChoice,
    /// Free text answer, capped at the text limit
    #[serde(rename = "Text Area")]
    #[display("Text Area")]
    TextArea,
}

impl QuestionKind {
    /// The option list a question of this kind starts with
    pub fn default_options(self) -> Vec<String> {
        match self {
            Self::MultipleChoice => vec![String::new(); DEFAULT_OPTION_COUNT],
            Self::TextArea => Vec::new(),
        }
    }
}

/// A single question being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    kind: QuestionKind,
    text: String,
    options: Vec<String>,
}

impl Question {
    /// Creates a blank multiple choice question with two empty options
    pub fn new(id: QuestionId) -> Self {
        Self {
            id,
            kind: QuestionKind::MultipleChoice,
            text: String::new(),
            options: QuestionKind::MultipleChoice.default_options(),
        }
    }

    /// Id assigned at creation
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Current kind
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Question text, exactly as entered
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Option strings, including blank ones
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Options that contain text, in order
    pub fn filled_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .map(String::as_str)
            .filter(|option| !option.is_empty())
    }

    pub(crate) fn set_kind(&mut self, kind: QuestionKind) {
        self.kind = kind;
        self.options = kind.default_options();
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn options_mut(&mut self) -> &mut Vec<String> {
        &mut self.options
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_new_question_defaults() {
        let question = Question::new(QuestionId::from(1));

        assert_eq!(question.id().get(), 1);
        assert_eq!(question.kind(), QuestionKind::MultipleChoice);
        assert_eq!(question.text(), "");
        assert_eq!(question.options(), &[String::new(), String::new()]);
    }

    #[test]
    fn test_set_kind_resets_options() {
        let mut question = Question::new(QuestionId::from(1));
        question.options_mut()[0] = "Red".to_string();
        question.options_mut().push("Blue".to_string());

        question.set_kind(QuestionKind::TextArea);
        assert!(question.options().is_empty());

        question.set_kind(QuestionKind::MultipleChoice);
        assert_eq!(question.options(), &[String::new(), String::new()]);
    }

    #[test]
    fn test_filled_options_skips_blanks() {
        let mut question = Question::new(QuestionId::from(1));
        *question.options_mut() = vec!["Red".into(), String::new(), "Blue".into()];

        assert_eq!(question.filled_options().collect::<Vec<_>>(), ["Red", "Blue"]);
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&QuestionKind::MultipleChoice).unwrap(),
            "\"MCQ\""
        );
        assert_eq!(
            serde_json::to_string(&QuestionKind::TextArea).unwrap(),
            "\"Text Area\""
        );
        assert_eq!(QuestionKind::TextArea.to_string(), "Text Area");
    }
}
