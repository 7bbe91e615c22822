//! Selectable options and the candidates offered by an autocomplete.

use serde::{Deserialize, Serialize};

/// Render key of the "no category" candidate.
pub const UNCATEGORIZED_KEY: &str = "UNCATEGORIZED_ID";
/// Render key of the "create new" candidate.
pub const CREATE_NEW_KEY: &str = "CREATED_TYPE_ID";

/// A named option backed by real data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display text.
    pub label: String,
    /// Stable identifier.
    pub value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }
}

/// One entry of an autocomplete result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CandidateOption {
    /// An option that already exists.
    Existing { id: String, title: String },
    /// The "no category" choice.
    Uncategorized,
    /// Offer to create an option titled `title`.
    CreateNew { title: String },
}

impl CandidateOption {
    /// Display text; `uncategorized_label` is used for the sentinel.
    pub fn label<'a>(&'a self, uncategorized_label: &'a str) -> &'a str {
        match self {
            CandidateOption::Existing { title, .. } | CandidateOption::CreateNew { title } => title,
            CandidateOption::Uncategorized => uncategorized_label,
        }
    }

    /// Key unique within one result list.
    pub fn key(&self) -> &str {
        match self {
            CandidateOption::Existing { id, .. } => id,
            CandidateOption::Uncategorized => UNCATEGORIZED_KEY,
            CandidateOption::CreateNew { .. } => CREATE_NEW_KEY,
        }
    }
}

impl From<&SelectOption> for CandidateOption {
    fn from(option: &SelectOption) -> Self {
        CandidateOption::Existing {
            id: option.value.clone(),
            title: option.label.clone(),
        }
    }
}
