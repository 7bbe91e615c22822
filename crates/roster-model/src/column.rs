//! Import column configuration.
//!
//! Each column of an uploaded sheet is either skipped or mapped onto one
//! target: a person field, the person identifier, tags, or organizations.
//! The per-kind payload lives inside [`ColumnConfig`] so that a kind and its
//! payload can never disagree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Discriminant of a [`ColumnConfig`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Unknown,
    Field,
    IdField,
    Tag,
    Organization,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Unknown => "unknown",
            ColumnKind::Field => "field",
            ColumnKind::IdField => "id",
            ColumnKind::Tag => "tag",
            ColumnKind::Organization => "org",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which person identifier an id column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdFieldRef {
    /// Internal numeric person id.
    Id,
    /// External id from another system.
    ExtId,
}

/// Maps one distinct cell value to the tags it should apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMapping {
    /// Cell value, `None` for empty cells.
    pub value: Option<String>,
    pub tag_ids: Vec<u64>,
}

/// Maps one distinct cell value to an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMapping {
    /// Cell value, `None` for empty cells.
    pub value: Option<String>,
    pub org_id: Option<u64>,
}

/// How a column is interpreted during import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnConfig {
    /// No target chosen.
    Unknown,
    /// Direct person field such as `email`.
    Field { field: String },
    /// Person identifier; `None` until the user picks which identifier.
    IdField { id_field: Option<IdFieldRef> },
    Tag {
        #[serde(default)]
        mapping: Vec<TagMapping>,
    },
    Organization {
        #[serde(default)]
        mapping: Vec<OrgMapping>,
    },
}

impl ColumnConfig {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnConfig::Unknown => ColumnKind::Unknown,
            ColumnConfig::Field { .. } => ColumnKind::Field,
            ColumnConfig::IdField { .. } => ColumnKind::IdField,
            ColumnConfig::Tag { .. } => ColumnKind::Tag,
            ColumnConfig::Organization { .. } => ColumnKind::Organization,
        }
    }

    /// Returns true for kinds that require a separate configuration step
    /// after the target is picked.
    pub fn needs_config(&self) -> bool {
        matches!(
            self,
            ColumnConfig::IdField { .. } | ColumnConfig::Tag { .. } | ColumnConfig::Organization { .. }
        )
    }
}

/// A target picked for a column, in its wire form `id`, `org`, `tag` or
/// `field:<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MappingTarget {
    Id,
    Organization,
    Tag,
    Field(String),
}

const FIELD_PREFIX: &str = "field:";

impl MappingTarget {
    /// Fresh configuration for this target, with an empty payload.
    pub fn initial_config(&self) -> ColumnConfig {
        match self {
            MappingTarget::Id => ColumnConfig::IdField { id_field: None },
            MappingTarget::Organization => ColumnConfig::Organization {
                mapping: Vec::new(),
            },
            MappingTarget::Tag => ColumnConfig::Tag {
                mapping: Vec::new(),
            },
            MappingTarget::Field(field) => ColumnConfig::Field {
                field: field.clone(),
            },
        }
    }
}

impl fmt::Display for MappingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingTarget::Id => f.write_str("id"),
            MappingTarget::Organization => f.write_str("org"),
            MappingTarget::Tag => f.write_str("tag"),
            MappingTarget::Field(field) => write!(f, "{FIELD_PREFIX}{field}"),
        }
    }
}

impl FromStr for MappingTarget {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(MappingTarget::Id),
            "org" => Ok(MappingTarget::Organization),
            "tag" => Ok(MappingTarget::Tag),
            _ => {
                let Some(field) = s.strip_prefix(FIELD_PREFIX) else {
                    return Err(ModelError::UnknownTarget(s.to_string()));
                };
                if field.is_empty() {
                    return Err(ModelError::EmptyField(s.to_string()));
                }
                Ok(MappingTarget::Field(field.to_string()))
            }
        }
    }
}

/// One column of the sheet being imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header text from the sheet.
    #[serde(default)]
    pub title: String,
    pub selected: bool,
    pub config: ColumnConfig,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            selected: false,
            config: ColumnConfig::Unknown,
        }
    }

    pub fn kind(&self) -> ColumnKind {
        self.config.kind()
    }

    /// Selects the column and replaces its configuration with a fresh one
    /// for `target`.
    ///
    /// Returns true if the target needs a configuration step.
    pub fn assign(&mut self, target: &MappingTarget) -> bool {
        self.selected = true;
        self.config = target.initial_config();
        self.config.needs_config()
    }

    /// Deselecting a column discards its configuration.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if !selected {
            self.config = ColumnConfig::Unknown;
        }
    }

    /// Wire value of the current target, or an empty string when unmapped.
    pub fn target_value(&self) -> String {
        match &self.config {
            ColumnConfig::Unknown => String::new(),
            ColumnConfig::Field { field } => format!("{FIELD_PREFIX}{field}"),
            other => other.kind().as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_targets() {
        assert_eq!("id".parse::<MappingTarget>().unwrap(), MappingTarget::Id);
        assert_eq!(
            "org".parse::<MappingTarget>().unwrap(),
            MappingTarget::Organization
        );
        assert_eq!("tag".parse::<MappingTarget>().unwrap(), MappingTarget::Tag);
        assert_eq!(
            "field:email".parse::<MappingTarget>().unwrap(),
            MappingTarget::Field("email".to_string())
        );
    }

    #[test]
    fn rejects_unknown_targets() {
        assert_eq!(
            "phone".parse::<MappingTarget>(),
            Err(ModelError::UnknownTarget("phone".to_string()))
        );
        assert_eq!(
            "field:".parse::<MappingTarget>(),
            Err(ModelError::EmptyField("field:".to_string()))
        );
    }

    #[test]
    fn target_display_matches_parse() {
        for raw in ["id", "org", "tag", "field:first_name"] {
            let target: MappingTarget = raw.parse().unwrap();
            assert_eq!(target.to_string(), raw);
        }
    }

    #[test]
    fn assign_resets_payload() {
        let mut column = Column::new("Tags");
        assert!(column.assign(&MappingTarget::Tag));
        assert!(column.selected);
        assert_eq!(
            column.config,
            ColumnConfig::Tag {
                mapping: Vec::new()
            }
        );

        assert!(!column.assign(&MappingTarget::Field("email".to_string())));
        assert_eq!(column.target_value(), "field:email");
    }

    #[test]
    fn deselect_clears_config() {
        let mut column = Column::new("Id");
        column.assign(&MappingTarget::Id);
        assert_eq!(column.target_value(), "id");

        column.set_selected(false);
        assert!(!column.selected);
        assert_eq!(column.kind(), ColumnKind::Unknown);
        assert_eq!(column.target_value(), "");
    }

    #[test]
    fn select_keeps_config() {
        let mut column = Column::new("Org");
        column.assign(&MappingTarget::Organization);
        column.set_selected(true);
        assert_eq!(column.target_value(), "org");
    }
}
