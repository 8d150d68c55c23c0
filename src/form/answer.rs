//! Respondent answers checked against a serialized form

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{document::QuestionRecord, question::QuestionKind};

/// An answer to one question of a [`Document`](super::document::Document)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// The `optionId` picked for a multiple choice question
    Choice(usize),
    /// Free text for a text area question
    Text(String),
}

/// Reasons an answer does not fit its question
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The chosen option id does not exist on the question
    #[error("option {0} does not exist")]
    UnknownOption(usize),
    /// The text is longer than the question allows
    #[error("answer exceeds {limit} characters")]
    TooLong {
        /// Character limit of the question
        limit: usize,
    },
    /// The answer kind does not match the question kind
    #[error("answer does not match a {0} question")]
    WrongKind(QuestionKind),
}

/// Checks that an answer is acceptable for a question record
///
/// # Errors
///
/// * `Error::UnknownOption` - choice id missing from the record's options
/// * `Error::TooLong` - text longer than the record's `textLimit`
/// * `Error::WrongKind` - choice given for a text area, or text for a choice
pub fn check(record: &QuestionRecord, answer: &Answer) -> Result<(), Error> {
    match (record.kind, answer) {
        (QuestionKind::MultipleChoice, Answer::Choice(option_id)) => {
            let known = record
                .options
                .iter()
                .flatten()
                .any(|option| option.option_id == *option_id);
            if known {
                Ok(())
            } else {
                Err(Error::UnknownOption(*option_id))
            }
        }
        (QuestionKind::TextArea, Answer::Text(text)) => match record.text_limit {
            Some(limit) if text.chars().count() > limit => Err(Error::TooLong { limit }),
            _ => Ok(()),
        },
        (kind, _) => Err(Error::WrongKind(kind)),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::form::{document::OptionRecord, question::QuestionId};

    fn mcq_record() -> QuestionRecord {
        QuestionRecord {
            question_id: QuestionId::from(1),
            kind: QuestionKind::MultipleChoice,
            question_text: "Color?".to_string(),
            options: Some(vec![
                OptionRecord {
                    option_id: 1,
                    option_text: "Red".to_string(),
                },
                OptionRecord {
                    option_id: 2,
                    option_text: "Blue".to_string(),
                },
            ]),
            text_limit: None,
        }
    }

    fn text_record() -> QuestionRecord {
        QuestionRecord {
            question_id: QuestionId::from(2),
            kind: QuestionKind::TextArea,
            question_text: "Comments".to_string(),
            options: None,
            text_limit: Some(2000),
        }
    }

    #[test]
    fn test_choice_answers() {
        let record = mcq_record();
        assert_eq!(check(&record, &Answer::Choice(2)), Ok(()));
        assert_eq!(
            check(&record, &Answer::Choice(3)),
            Err(Error::UnknownOption(3))
        );
        assert_eq!(
            check(&record, &Answer::Choice(0)),
            Err(Error::UnknownOption(0))
        );
    }

    #[test]
    fn test_text_answer_limit_counts_chars() {
        let record = text_record();
        assert_eq!(check(&record, &Answer::Text("é".repeat(2000))), Ok(()));
        assert_eq!(
            check(&record, &Answer::Text("a".repeat(2001))),
            Err(Error::TooLong { limit: 2000 })
        );
    }

    #[test]
    fn test_wrong_kind() {
        assert_eq!(
            check(&mcq_record(), &Answer::Text("Red".to_string())),
            Err(Error::WrongKind(QuestionKind::MultipleChoice))
        );
        assert_eq!(
            check(&text_record(), &Answer::Choice(1)),
            Err(Error::WrongKind(QuestionKind::TextArea))
        );
        assert_eq!(
            Error::WrongKind(QuestionKind::TextArea).to_string(),
            "answer does not match a Text Area question"
        );
    }
}
