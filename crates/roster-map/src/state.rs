//! Mapping state for the column configuration step of an import.
//!
//! This is where the completeness check meets the `selected` flag: a column
//! only blocks the import when it is selected and unfinished.

use roster_model::{Column, ColumnConfig, MappingTarget, SelectOption};
use serde::{Deserialize, Serialize};

use crate::classify::is_unfinished;

/// What a column still needs before the import can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStatus {
    /// Not selected; ignored by the import.
    Skipped,
    /// Selected id column without a chosen identifier.
    NeedsConfig,
    /// Selected column with no target, or tags/organizations with no values
    /// mapped.
    NeedsMapping,
    /// Nothing left to do.
    Ready,
}

impl ColumnStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnStatus::Skipped => "skipped",
            ColumnStatus::NeedsConfig => "needs config",
            ColumnStatus::NeedsMapping => "needs mapping",
            ColumnStatus::Ready => "ready",
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, ColumnStatus::NeedsConfig | ColumnStatus::NeedsMapping)
    }
}

/// Status of one column, gated on `selected`.
pub fn column_status(column: &Column) -> ColumnStatus {
    if !column.selected {
        return ColumnStatus::Skipped;
    }
    if !is_unfinished(&column.config) {
        return ColumnStatus::Ready;
    }
    match column.config {
        ColumnConfig::IdField { .. } => ColumnStatus::NeedsConfig,
        _ => ColumnStatus::NeedsMapping,
    }
}

/// All columns of the sheet being configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingState {
    pub columns: Vec<Column>,
}

impl MappingState {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Indices of selected columns whose mapping is unfinished.
    pub fn unfinished_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.selected && is_unfinished(&column.config))
            .map(|(index, _)| index)
            .collect()
    }

    /// True when at least one column is selected and none is unfinished.
    pub fn can_proceed(&self) -> bool {
        self.columns.iter().any(|column| column.selected) && self.unfinished_columns().is_empty()
    }

    /// Whether another selected column already uses `target`.
    ///
    /// Only field targets are exclusive; any number of columns may map to
    /// the identifier, tags or organizations.
    pub fn target_taken(&self, target: &MappingTarget, column_index: usize) -> bool {
        let MappingTarget::Field(field) = target else {
            return false;
        };
        self.columns
            .iter()
            .enumerate()
            .filter(|(index, column)| *index != column_index && column.selected)
            .any(|(_, column)| {
                matches!(&column.config, ColumnConfig::Field { field: other } if other == field)
            })
    }

    /// Target picker options for the column at `column_index`, with every
    /// option whose value names a target taken by another column disabled.
    ///
    /// Values that do not parse as a target keep their own flag.
    pub fn target_options(
        &self,
        options: &[SelectOption],
        column_index: usize,
    ) -> Vec<SelectOption> {
        options
            .iter()
            .map(|option| {
                let mut option = option.clone();
                if let Ok(target) = option.value.parse::<MappingTarget>()
                    && self.target_taken(&target, column_index)
                {
                    option.disabled = true;
                }
                option
            })
            .collect()
    }

    /// Assign `target` to the column at `column_index`.
    ///
    /// Returns whether the column now needs configuring, or `None` if the
    /// index is out of range.
    pub fn assign(&mut self, column_index: usize, target: &MappingTarget) -> Option<bool> {
        self.columns
            .get_mut(column_index)
            .map(|column| column.assign(target))
    }

    pub fn statuses(&self) -> Vec<ColumnStatus> {
        self.columns.iter().map(column_status).collect()
    }

    /// Get summary counts.
    pub fn summary(&self) -> MappingSummary {
        let mut summary = MappingSummary {
            total_columns: self.columns.len(),
            skipped: 0,
            ready: 0,
            needs_config: 0,
            needs_mapping: 0,
        };
        for status in self.statuses() {
            match status {
                ColumnStatus::Skipped => summary.skipped += 1,
                ColumnStatus::Ready => summary.ready += 1,
                ColumnStatus::NeedsConfig => summary.needs_config += 1,
                ColumnStatus::NeedsMapping => summary.needs_mapping += 1,
            }
        }
        summary
    }
}

/// Summary of column counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSummary {
    pub total_columns: usize,
    pub skipped: usize,
    pub ready: usize,
    pub needs_config: usize,
    pub needs_mapping: usize,
}

#[cfg(test)]
mod tests {
    use roster_model::IdFieldRef;

    use super::*;

    fn field(title: &str, name: &str) -> Column {
        let mut column = Column::new(title);
        column.assign(&MappingTarget::Field(name.to_string()));
        column
    }

    #[test]
    fn unselected_column_is_skipped_even_if_unfinished() {
        let column = Column::new("Notes");
        assert!(is_unfinished(&column.config));
        assert_eq!(column_status(&column), ColumnStatus::Skipped);
    }

    #[test]
    fn id_column_needs_config_until_chosen() {
        let mut column = Column::new("Id");
        column.assign(&MappingTarget::Id);
        assert_eq!(column_status(&column), ColumnStatus::NeedsConfig);

        column.config = ColumnConfig::IdField {
            id_field: Some(IdFieldRef::ExtId),
        };
        assert_eq!(column_status(&column), ColumnStatus::Ready);
    }

    #[test]
    fn selected_unknown_needs_mapping() {
        let mut column = Column::new("Notes");
        column.selected = true;
        assert_eq!(column_status(&column), ColumnStatus::NeedsMapping);
    }

    #[test]
    fn can_proceed_requires_a_selected_column() {
        let state = MappingState::new(vec![Column::new("A"), Column::new("B")]);
        assert!(state.unfinished_columns().is_empty());
        assert!(!state.can_proceed());
    }

    #[test]
    fn unfinished_selected_column_blocks() {
        let mut tags = Column::new("Tags");
        tags.assign(&MappingTarget::Tag);
        let state = MappingState::new(vec![field("Email", "email"), tags, Column::new("Skip")]);
        assert_eq!(state.unfinished_columns(), vec![1]);
        assert!(!state.can_proceed());

        let summary = state.summary();
        assert_eq!(summary.total_columns, 3);
        assert_eq!(summary.ready, 1);
        assert_eq!(summary.needs_mapping, 1);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn field_targets_are_exclusive() {
        let state = MappingState::new(vec![field("Email", "email"), Column::new("Mail")]);
        let email = MappingTarget::Field("email".to_string());
        assert!(state.target_taken(&email, 1));
        assert!(!state.target_taken(&email, 0));
        assert!(!state.target_taken(&MappingTarget::Tag, 1));
    }

    #[test]
    fn target_options_disable_taken_fields() {
        let state = MappingState::new(vec![field("Email", "email"), Column::new("Mail")]);
        let mut custom = SelectOption::new("Custom", "not a target");
        custom.disabled = true;
        let options = vec![
            SelectOption::new("Email", "field:email"),
            SelectOption::new("Phone", "field:phone"),
            SelectOption::new("Tags", "tag"),
            custom,
        ];

        let disabled: Vec<bool> = state
            .target_options(&options, 1)
            .iter()
            .map(|option| option.disabled)
            .collect();
        assert_eq!(disabled, vec![true, false, false, true]);

        let own = state.target_options(&options, 0);
        assert!(!own[0].disabled);
    }

    #[test]
    fn assign_out_of_range() {
        let mut state = MappingState::new(vec![Column::new("A")]);
        assert_eq!(state.assign(0, &MappingTarget::Organization), Some(true));
        assert_eq!(state.assign(5, &MappingTarget::Tag), None);
    }
}
