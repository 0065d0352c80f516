//! Option Entity
//!
//! A single `{label, value}` entry of an option list.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// One selectable entry of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOption {
    /// Display text
    pub label: String,
    /// Normalized identifier stored on the owning record
    pub value: String,
}

impl ListOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Trim both fields and reject blanks.
    ///
    /// The value is kept as supplied: legacy values that do not follow the
    /// lower_snake form are accepted.
    pub fn normalized(&self) -> DomainResult<Self> {
        let label = self.label.trim();
        let value = self.value.trim();
        if label.is_empty() || value.is_empty() {
            return Err(DomainError::Validation(
                "Label and value are required".to_string(),
            ));
        }
        Ok(Self::new(label, value))
    }

    /// Case-insensitive equality on label OR value
    pub fn collides_with(&self, other: &ListOption) -> bool {
        eq_ignore_case(&self.label, &other.label) || eq_ignore_case(&self.value, &other.value)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
