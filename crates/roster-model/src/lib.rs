pub mod column;
pub mod error;
pub mod options;
pub mod summary;

pub use column::{
    Column, ColumnConfig, ColumnKind, IdFieldRef, MappingTarget, OrgMapping, TagMapping,
};
pub use error::{ModelError, Result};
pub use options::{CREATE_NEW_KEY, CandidateOption, SelectOption, UNCATEGORIZED_KEY};
pub use summary::{CountSummary, ImportSummary};
