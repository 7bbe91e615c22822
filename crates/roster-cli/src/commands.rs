//! Command implementations, independent of argument parsing and printing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, info_span, warn};

use roster_map::{ColumnStatus, MappingState, MappingSummary, MergerSettings, OptionMerger};
use roster_model::{CandidateOption, Column, SelectOption};

/// Process exit code for a command that ran to completion.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for errors and for a `check` that found blocking columns.
pub const EXIT_FAILURE: i32 = 1;

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

/// Settings from an optional file, with an optional threshold override.
pub fn load_settings(path: Option<&Path>, threshold: Option<f64>) -> Result<MergerSettings> {
    let mut settings = match path {
        Some(path) => load_json::<MergerSettings>(path)?,
        None => MergerSettings::default(),
    };
    if let Some(threshold) = threshold {
        settings = settings.with_threshold(threshold);
    }
    settings.validate().context("invalid merger settings")?;
    Ok(settings)
}

/// Candidates produced for one query.
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub query: String,
    pub threshold: f64,
    pub uncategorized_label: String,
    pub candidates: Vec<CandidateOption>,
}

pub fn run_filter(options: &[SelectOption], query: &str, settings: MergerSettings) -> FilterReport {
    let span = info_span!("filter", options = options.len());
    let _guard = span.enter();
    let threshold = settings.threshold;
    let uncategorized_label = settings.uncategorized_label.clone();
    let candidates = OptionMerger::new(settings).filter(options, query);
    info!(candidates = candidates.len(), "filtered");
    FilterReport {
        query: query.to_string(),
        threshold,
        uncategorized_label,
        candidates,
    }
}

/// Status of one column in a check report.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub index: usize,
    pub title: String,
    /// Wire value of the mapped target, empty when unmapped.
    pub target: String,
    pub status: ColumnStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub columns: Vec<ColumnReport>,
    pub summary: MappingSummary,
    pub can_proceed: bool,
}

impl CheckReport {
    /// `check` fails when the import cannot proceed.
    pub fn exit_code(&self) -> i32 {
        if self.can_proceed {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }
}

pub fn run_check(columns: Vec<Column>) -> CheckReport {
    let span = info_span!("check", columns = columns.len());
    let _guard = span.enter();
    let state = MappingState::new(columns);
    let reports: Vec<ColumnReport> = state
        .columns
        .iter()
        .zip(state.statuses())
        .enumerate()
        .map(|(index, (column, status))| ColumnReport {
            index,
            title: column.title.clone(),
            target: column.target_value(),
            status,
        })
        .collect();
    for report in reports.iter().filter(|r| r.status.is_blocking()) {
        warn!(
            column = report.index,
            status = report.status.as_str(),
            "column blocks import"
        );
    }
    let can_proceed = state.can_proceed();
    info!(can_proceed, "checked columns");
    CheckReport {
        columns: reports,
        summary: state.summary(),
        can_proceed,
    }
}
