//! Approximate substring scoring for autocomplete labels.
//!
//! A query matches a label when some window of the label is within a few
//! edits of the query. The score of a window is the fraction of the query
//! that had to be edited plus a penalty for how far the window starts from
//! the expected location. Lower is better; `0.0` is an exact hit at the
//! expected location.

use std::cmp::Ordering;

use rapidfuzz::distance::levenshtein;

use crate::settings::MergerSettings;

/// Longest run of query chars scored as one pattern.
pub const MAX_CHUNK: usize = 32;

/// One item that matched a query, with its position in the input.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a, T> {
    /// Index of the item in the searched slice.
    pub index: usize,
    pub item: &'a T,
    /// Match score (0.0 to threshold).
    pub score: f64,
}

/// Scores labels against a query using a bounded edit budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
    location: usize,
    distance: usize,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::from_settings(&MergerSettings::default())
    }
}

impl FuzzyMatcher {
    /// Create a matcher. Thresholds outside `[0, 1]` are clamped and NaN
    /// is treated as `0.0`.
    pub fn new(threshold: f64, location: usize, distance: usize) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            location,
            distance,
        }
    }

    pub fn from_settings(settings: &MergerSettings) -> Self {
        Self::new(settings.threshold, settings.location, settings.distance)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score `label` against `query`.
    ///
    /// Returns `None` if the query is empty or no window scores within the
    /// threshold.
    pub fn score(&self, query: &str, label: &str) -> Option<f64> {
        let pattern: Vec<char> = query.to_lowercase().chars().collect();
        self.score_pattern(&pattern, label)
    }

    /// Score every item and keep the matches, best first.
    ///
    /// Items with equal scores keep their input order.
    pub fn search<'a, T, F>(&self, query: &str, items: &'a [T], key: F) -> Vec<Scored<'a, T>>
    where
        F: Fn(&T) -> &str,
    {
        let pattern: Vec<char> = query.to_lowercase().chars().collect();
        let mut matches: Vec<Scored<'a, T>> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                self.score_pattern(&pattern, key(item))
                    .map(|score| Scored { index, item, score })
            })
            .collect();
        // sort_by is stable, so ties stay in input order
        matches.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        matches
    }

    fn score_pattern(&self, pattern: &[char], label: &str) -> Option<f64> {
        let text: Vec<char> = label.to_lowercase().chars().collect();
        self.score_chars(pattern, &text, &mut 0)
    }

    /// Long queries are scored in chunks of [`MAX_CHUNK`] chars, each
    /// expected at `location` plus its offset in the query. Every chunk must
    /// match; the label's score is the mean chunk score.
    fn score_chars(&self, pattern: &[char], text: &[char], windows: &mut usize) -> Option<f64> {
        if pattern.is_empty() {
            return None;
        }
        let chunks = pattern.chunks(MAX_CHUNK);
        let count = chunks.len();
        let mut total = 0.0;
        for (index, chunk) in chunks.enumerate() {
            let location = self.location + index * MAX_CHUNK;
            total += self.score_chunk(chunk, text, location, windows)?;
        }
        Some(total / count as f64)
    }

    fn score_chunk(
        &self,
        chunk: &[char],
        text: &[char],
        location: usize,
        windows: &mut usize,
    ) -> Option<f64> {
        let chunk_len = chunk.len();
        let budget = (self.threshold * chunk_len as f64).floor() as usize;
        let min_window = chunk_len.saturating_sub(budget).max(1);
        let max_window = chunk_len + budget;

        // Starts further than `reach` from `location` cost more than the
        // threshold on proximity alone.
        let reach = if self.distance == 0 {
            0
        } else {
            (self.threshold * self.distance as f64).floor() as usize
        };
        let first = location.saturating_sub(reach);
        let last = location.saturating_add(reach).min(text.len().saturating_sub(1));

        let mut best: Option<f64> = None;
        for start in first..=last {
            if start >= text.len() {
                break;
            }
            let proximity = self.proximity(start, location);
            let remaining = text.len() - start;
            for len in min_window..=max_window.min(remaining) {
                *windows += 1;
                let window = &text[start..start + len];
                let edits = levenshtein::distance(chunk.iter().copied(), window.iter().copied());
                if edits > budget {
                    continue;
                }
                let score = edits as f64 / chunk_len as f64 + proximity;
                if score <= self.threshold && best.is_none_or(|current| score < current) {
                    best = Some(score);
                }
            }
        }
        best
    }

    fn proximity(&self, start: usize, location: usize) -> f64 {
        let offset = start.abs_diff(location);
        if self.distance == 0 {
            return if offset == 0 { 0.0 } else { 1.0 };
        }
        offset as f64 / self.distance as f64
    }
}
