//! Group policy configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyGroupError};

fn default_min_name_chars() -> usize {
    5
}

fn default_max_name_chars() -> usize {
    30
}

/// Validation policy applied to study group creation at the boundary.
///
/// The bounds apply to the character count of the name after trimming
/// surrounding whitespace.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupPolicy {
    /// Minimum group name length in characters.
    #[serde(default = "default_min_name_chars")]
    pub min_name_chars: usize,
    /// Maximum group name length in characters.
    #[serde(default = "default_max_name_chars")]
    pub max_name_chars: usize,
}

impl Default for GroupPolicy {
    fn default() -> Self {
        Self {
            min_name_chars: default_min_name_chars(),
            max_name_chars: default_max_name_chars(),
        }
    }
}

impl GroupPolicy {
    /// Trims the candidate name and checks it against the length bounds.
    ///
    /// Returns the trimmed name on success so callers store exactly what
    /// was validated.
    pub fn validate_name<'a>(&self, name: &'a str) -> Result<&'a str> {
        let trimmed = name.trim();
        let len = trimmed.chars().count();
        if len < self.min_name_chars || len > self.max_name_chars {
            return Err(StudyGroupError::invalid_name(
                self.min_name_chars,
                self.max_name_chars,
            ));
        }
        Ok(trimmed)
    }
}
