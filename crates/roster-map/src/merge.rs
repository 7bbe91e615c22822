//! Merges fuzzy search results with the synthetic "no category" and
//! "create new" candidates.

use roster_model::{CandidateOption, SelectOption};
use tracing::{debug, trace};

use crate::score::FuzzyMatcher;
use crate::settings::MergerSettings;

/// Builds the candidate list an autocomplete shows for a query.
#[derive(Debug, Clone)]
pub struct OptionMerger {
    settings: MergerSettings,
    matcher: FuzzyMatcher,
}

impl Default for OptionMerger {
    fn default() -> Self {
        Self::new(MergerSettings::default())
    }
}

impl OptionMerger {
    pub fn new(settings: MergerSettings) -> Self {
        let matcher = FuzzyMatcher::from_settings(&settings);
        Self { settings, matcher }
    }

    pub fn settings(&self) -> &MergerSettings {
        &self.settings
    }

    /// Candidates for `query` over `options`.
    ///
    /// `options` must hold only real options; the "no category" entry is
    /// added here. An empty query returns every option as-is. Otherwise the
    /// result is the fuzzy matches (best first), then `Uncategorized`, then
    /// `CreateNew` unless some earlier candidate's label equals the query
    /// ignoring case.
    ///
    /// `SelectOption::disabled` plays no part here: disabled options are
    /// matched and returned like any other, and greying them out is left to
    /// whoever renders the list (see `MappingState::target_options`).
    pub fn filter(&self, options: &[SelectOption], query: &str) -> Vec<CandidateOption> {
        if query.is_empty() {
            return options.iter().map(CandidateOption::from).collect();
        }

        let matches = self
            .matcher
            .search(query, options, |option| option.label.as_str());
        let matched = matches.len();

        let mut candidates: Vec<CandidateOption> = matches
            .into_iter()
            .map(|scored| {
                trace!(label = %scored.item.label, score = scored.score, "matched option");
                CandidateOption::from(scored.item)
            })
            .collect();
        candidates.push(CandidateOption::Uncategorized);

        let lowered = query.to_lowercase();
        let exact = candidates.iter().any(|candidate| {
            candidate
                .label(&self.settings.uncategorized_label)
                .to_lowercase()
                == lowered
        });
        if !exact {
            candidates.push(CandidateOption::CreateNew {
                title: capitalize_first(query),
            });
        }

        debug!(
            query_len = query.chars().count(),
            options = options.len(),
            matched,
            create_offered = !exact,
            "filtered options"
        );
        candidates
    }
}

/// Filter `options` for `query` with default settings and the given
/// threshold.
pub fn filter_options(
    options: &[SelectOption],
    query: &str,
    threshold: f64,
) -> Vec<CandidateOption> {
    OptionMerger::new(MergerSettings::default().with_threshold(threshold)).filter(options, query)
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
