//! Form building
//!
//! This module contains the question model, the list editor that mutates it,
//! the rules deciding when a form can be submitted, and the document a
//! submitted form is serialized into.

pub mod answer;
pub mod document;
pub mod editor;
pub mod question;
pub mod validate;

pub use document::{Document, serialize};
pub use editor::{Edit, QuestionListEditor};
pub use question::{Question, QuestionId, QuestionKind};
pub use validate::is_submittable;
