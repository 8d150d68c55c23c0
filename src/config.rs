//! Editor configuration
//!
//! Behavior switches for [`QuestionListEditor`](crate::form::editor::QuestionListEditor).
//! The defaults give unique question ids and a hard two-option floor for
//! multiple choice questions; both can be relaxed to match older documents.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants::multiple_choice::{MAX_OPTION_COUNT, MIN_OPTION_COUNT};

/// How question ids are assigned when a question is added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdPolicy {
    /// Each question gets the next value of a counter that is never reused
    #[default]
    Monotonic,
    /// Each question gets `length + 1` at creation time, so ids may repeat
    /// after removals
    Positional,
}

/// Configuration for a question list editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EditorConfig {
    /// Id assignment strategy for new questions
    #[garde(skip)]
    pub id_policy: IdPolicy,
    /// Refuse option removals that would leave a multiple choice question
    /// with fewer than the minimum number of options
    #[garde(skip)]
    pub enforce_option_minimum: bool,
    /// Upper bound on options per question
    #[garde(range(min = MIN_OPTION_COUNT, max = MAX_OPTION_COUNT))]
    pub max_options: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            enforce_option_minimum: true,
            max_options: MAX_OPTION_COUNT,
        }
    }
}

impl EditorConfig {
    /// Option cap actually applied by the editor
    ///
    /// `max_options` is clamped into the valid range, so a configuration
    /// that skipped validation still keeps every question within bounds.
    pub fn option_cap(&self) -> usize {
        self.max_options.clamp(MIN_OPTION_COUNT, MAX_OPTION_COUNT)
    }

    /// Configuration reproducing the positional ids and loose option removal
    /// of the first form builder release
    pub fn legacy() -> Self {
        Self {
            id_policy: IdPolicy::Positional,
            enforce_option_minimum: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.id_policy, IdPolicy::Monotonic);
        assert!(config.enforce_option_minimum);
        assert_eq!(config.max_options, 8);
    }

    #[test]
    fn test_legacy_config() {
        let config = EditorConfig::legacy();
        assert!(config.validate().is_ok());
        assert_eq!(config.id_policy, IdPolicy::Positional);
        assert!(!config.enforce_option_minimum);
    }

    #[test]
    fn test_max_options_out_of_bounds() {
        let config = EditorConfig {
            max_options: 9,
            ..EditorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EditorConfig {
            max_options: 1,
            ..EditorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_option_cap_clamped() {
        let cap = |max_options| {
            EditorConfig {
                max_options,
                ..EditorConfig::default()
            }
            .option_cap()
        };
        assert_eq!(cap(20), MAX_OPTION_COUNT);
        assert_eq!(cap(0), MIN_OPTION_COUNT);
        assert_eq!(cap(5), 5);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"id_policy":"Positional"}"#).unwrap();
        assert_eq!(config.id_policy, IdPolicy::Positional);
        assert!(config.enforce_option_minimum);
        assert_eq!(config.max_options, 8);
    }
}
