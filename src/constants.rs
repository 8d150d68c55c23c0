//! Limits and fixed values for the form builder
//!
//! This module gathers every bound the editor, validator and serializer
//! agree on, so a single edit here changes behavior consistently.

/// Form-level constants
pub mod form {
    /// Title emitted in every serialized document
    pub const TITLE: &str = "Untitled Form";
    /// Maximum length of a document title in characters
    pub const MAX_TITLE_LENGTH: usize = 200;
    /// Number of complete questions required before a form can be submitted
    pub const MIN_COMPLETE_QUESTIONS: usize = 2;
    /// Message shown when a submission is rejected
    pub const REJECTION_MESSAGE: &str =
        "Please complete at least two questions before submitting.";
}

/// Multiple choice question constants
pub mod multiple_choice {
    /// Number of blank options a fresh multiple choice question starts with
    pub const DEFAULT_OPTION_COUNT: usize = 2;
    /// Minimum number of non-empty options for a question to be complete
    pub const MIN_OPTION_COUNT: usize = 2;
    /// Maximum number of options a question may hold
    pub const MAX_OPTION_COUNT: usize = 8;
}

/// Text area question constants
pub mod text_area {
    /// Maximum length of a text answer in characters
    pub const TEXT_LIMIT: usize = 2000;
}
