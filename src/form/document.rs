//! Output document produced on submission
//!
//! The document is the JSON shape handed to whoever consumes a finished form.
//! Multiple choice questions carry their non-empty options, renumbered from 1;
//! text area questions carry the answer length limit instead.

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::constants::{form, multiple_choice, text_area};

use super::question::{Question, QuestionId, QuestionKind};

/// A serialized form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The form title
    #[garde(length(chars, max = form::MAX_TITLE_LENGTH))]
    pub form_title: String,
    /// Every question of the form, complete or not
    #[garde(dive)]
    pub questions: Vec<QuestionRecord>,
}

/// One question of a serialized form
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// Id of the source question
    #[garde(skip)]
    pub question_id: QuestionId,
    /// Kind of the source question
    #[serde(rename = "type")]
    #[garde(skip)]
    pub kind: QuestionKind,
    /// Question text, verbatim
    #[garde(skip)]
    pub question_text: String,
    /// Filled options, present for multiple choice only
    #[garde(length(max = multiple_choice::MAX_OPTION_COUNT))]
    pub options: Option<Vec<OptionRecord>>,
    /// Answer length limit, present for text areas only
    #[garde(range(max = text_area::TEXT_LIMIT))]
    pub text_limit: Option<usize>,
}

/// A numbered option of a multiple choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRecord {
    /// 1-based position among the filled options
    pub option_id: usize,
    /// Option text
    pub option_text: String,
}

impl QuestionRecord {
    /// Builds the output record for a question
    pub fn from_question(question: &Question) -> Self {
        let (options, text_limit) = match question.kind() {
            QuestionKind::MultipleChoice => (
                Some(
                    question
                        .filled_options()
                        .enumerate()
                        .map(|(index, text)| OptionRecord {
                            option_id: index + 1,
                            option_text: text.to_owned(),
                        })
                        .collect_vec(),
                ),
                None,
            ),
            QuestionKind::TextArea => (None, Some(text_area::TEXT_LIMIT)),
        };

        Self {
            question_id: question.id(),
            kind: question.kind(),
            question_text: question.text().to_owned(),
            options,
            text_limit,
        }
    }
}

impl Document {
    /// Converts the document to pretty-printed JSON
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which cannot happen for
    /// a document made of strings and integers.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("default serializer cannot fail")
    }

    /// Finds the record of a question by id
    pub fn question(&self, id: QuestionId) -> Option<&QuestionRecord> {
        self.questions.iter().find(|record| record.question_id == id)
    }
}

/// Serializes a question list into a document titled "Untitled Form"
pub fn serialize(questions: &[Question]) -> Document {
    Document {
        form_title: form::TITLE.to_owned(),
        questions: questions
            .iter()
            .map(QuestionRecord::from_question)
            .collect_vec(),
    }
}
