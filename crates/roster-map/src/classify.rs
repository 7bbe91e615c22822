//! Completeness check for a column's mapping configuration.

use roster_model::ColumnConfig;

/// Returns true if the configuration still blocks the import.
///
/// The column's `selected` flag is not consulted; callers that only care
/// about selected columns must check it themselves (see
/// [`crate::state::column_status`]).
pub fn is_unfinished(config: &ColumnConfig) -> bool {
    match config {
        ColumnConfig::Unknown => true,
        ColumnConfig::Field { .. } => false,
        ColumnConfig::IdField { id_field } => id_field.is_none(),
        ColumnConfig::Tag { mapping } => mapping.is_empty(),
        ColumnConfig::Organization { mapping } => mapping.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use roster_model::{IdFieldRef, OrgMapping, TagMapping};

    use super::*;

    #[test]
    fn field_is_finished() {
        let config = ColumnConfig::Field {
            field: "email".to_string(),
        };
        assert!(!is_unfinished(&config));
    }

    #[test]
    fn unknown_is_unfinished() {
        assert!(is_unfinished(&ColumnConfig::Unknown));
    }

    #[test]
    fn id_field_needs_reference() {
        assert!(is_unfinished(&ColumnConfig::IdField { id_field: None }));
        assert!(!is_unfinished(&ColumnConfig::IdField {
            id_field: Some(IdFieldRef::Id)
        }));
        assert!(!is_unfinished(&ColumnConfig::IdField {
            id_field: Some(IdFieldRef::ExtId)
        }));
    }

    #[test]
    fn tag_needs_mapping() {
        assert!(is_unfinished(&ColumnConfig::Tag {
            mapping: Vec::new()
        }));
        assert!(!is_unfinished(&ColumnConfig::Tag {
            mapping: vec![TagMapping {
                value: Some("vip".to_string()),
                tag_ids: vec![3],
            }],
        }));
    }

    #[test]
    fn organization_needs_mapping() {
        assert!(is_unfinished(&ColumnConfig::Organization {
            mapping: Vec::new()
        }));
        assert!(!is_unfinished(&ColumnConfig::Organization {
            mapping: vec![OrgMapping {
                value: None,
                org_id: Some(1),
            }],
        }));
    }
}
