//! Validation Options
//!
//! Per-call settings handed to the validator untouched.

use serde::{Deserialize, Serialize};

/// Options forwarded to the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Stop at the first failing field (default: false)
    #[serde(default)]
    pub stop_on_first_failure: bool,

    /// Leave fields without rules out of the filtered data (default: true)
    #[serde(default = "default_exclude_unvalidated")]
    pub exclude_unvalidated: bool,

    /// Locale for rendered messages (default: validator's own)
    #[serde(default)]
    pub locale: Option<String>,
}

fn default_exclude_unvalidated() -> bool {
    true
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            stop_on_first_failure: false,
            exclude_unvalidated: default_exclude_unvalidated(),
            locale: None,
        }
    }
}

impl ValidationOptions {
    /// Options that stop at the first failure
    pub fn fail_fast() -> Self {
        Self {
            stop_on_first_failure: true,
            ..Default::default()
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn include_unvalidated(mut self) -> Self {
        self.exclude_unvalidated = false;
        self
    }
}
