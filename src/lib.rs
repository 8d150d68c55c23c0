//! # Form Builder Library
//!
//! This library provides the editing core of a form builder. A form is an
//! ordered list of multiple choice and text area questions; the
//! [`QuestionListEditor`](form::QuestionListEditor) edits that list through
//! immutable snapshots, [`form::validate`] decides when the form may be
//! submitted, and [`form::document`] turns it into the JSON document handed
//! to consumers.
//!
//! Logging goes through `tracing`; install a subscriber to see refused edits
//! and submitted documents.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constants;
pub mod form;

pub use config::EditorConfig;
pub use form::{Document, Edit, QuestionKind, QuestionListEditor};
