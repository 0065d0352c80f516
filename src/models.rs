//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Option list entry (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOption {
    pub label: String,
    pub value: String,
}

impl ListOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// New option for free text typed by the user
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::new(label, derive_value(label))
    }

    /// Same label or same value, ignoring case
    pub fn collides_with(&self, other: &ListOption) -> bool {
        eq_ignore_case(&self.label, &other.label) || eq_ignore_case(&self.value, &other.value)
    }
}

/// Error body returned by the backend (`{"error": "..."}`)
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// "Data  Science" -> "data_science"
pub fn derive_value(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
