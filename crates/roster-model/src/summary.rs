use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSummary {
    pub total: u64,
}

/// People created and updated by a finished import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub created: CountSummary,
    pub updated: CountSummary,
}

impl ImportSummary {
    /// Created plus updated, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.created.total.saturating_add(self.updated.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_saturates() {
        let summary = ImportSummary {
            created: CountSummary { total: u64::MAX },
            updated: CountSummary { total: 3 },
        };
        assert_eq!(summary.total(), u64::MAX);
    }
}
