//! What happens when the user picks a candidate.
//!
//! Picking `CreateNew` does not create anything here. It yields a
//! [`PendingCreation`]; the caller creates the option, refreshes its option
//! list, and calls [`PendingCreation::resolve`] until the new option shows
//! up with an identifier.

use roster_model::{CandidateOption, SelectOption};
use serde::{Deserialize, Serialize};

/// Result of picking a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// An existing option is now the value.
    Selected { id: String, title: String },
    /// The value is cleared ("no category").
    Cleared,
    /// The caller must create an option with this title.
    Create(PendingCreation),
}

/// A requested option that does not have an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCreation {
    title: String,
}

impl PendingCreation {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Look for the created option in a refreshed option list.
    ///
    /// Returns `None` until an option with exactly this title is present.
    pub fn resolve(&self, options: &[SelectOption]) -> Option<SelectionOutcome> {
        options
            .iter()
            .find(|option| option.label == self.title)
            .map(|option| SelectionOutcome::Selected {
                id: option.value.clone(),
                title: option.label.clone(),
            })
    }
}

/// Turn a picked candidate into the action the caller must take.
pub fn select(candidate: CandidateOption) -> SelectionOutcome {
    match candidate {
        CandidateOption::Existing { id, title } => SelectionOutcome::Selected { id, title },
        CandidateOption::Uncategorized => SelectionOutcome::Cleared,
        CandidateOption::CreateNew { title } => SelectionOutcome::Create(PendingCreation { title }),
    }
}
