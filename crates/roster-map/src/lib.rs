//! Column mapping completeness and autocomplete option merging.
//!
//! - [`is_unfinished`] decides whether a column's configuration still blocks
//!   an import.
//! - [`OptionMerger`] turns a typed query and a list of options into the
//!   candidates an autocomplete shows, including the "no category" and
//!   "create new" entries.
//! - [`select`] and [`PendingCreation`] describe what the caller does when a
//!   candidate is picked.

#![deny(unsafe_code)]

pub mod classify;
pub mod error;
pub mod merge;
pub mod score;
pub mod select;
pub mod settings;
pub mod state;

pub use classify::is_unfinished;
pub use error::{MapError, Result};
pub use merge::{OptionMerger, capitalize_first, filter_options};
pub use score::{FuzzyMatcher, MAX_CHUNK, Scored};
pub use select::{PendingCreation, SelectionOutcome, select};
pub use settings::{DEFAULT_THRESHOLD, MergerSettings};
pub use state::{ColumnStatus, MappingState, MappingSummary, column_status};
