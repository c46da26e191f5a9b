//! Outcome of one rule-evaluation run.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Reason the pipeline stopped before reviewer/assignee selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The title contained a configured skip keyword.
    SkipKeyword(String),
    /// Draft pull request with `runOnDraft` disabled.
    Draft,
    /// Existing labels failed the include/exclude filter.
    FilterLabels,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SkipKeyword(keyword) => write!(f, "title contains skip keyword {keyword:?}"),
            Self::Draft => write!(f, "draft pull request"),
            Self::FilterLabels => write!(f, "existing labels failed the filter"),
        }
    }
}

/// Accumulated decision for one pull-request event.
///
/// Labels live in a set, so repeated insertion of an already-derived label
/// is a no-op. Reviewer and assignee lists keep selection order and never
/// contain the pull-request author.
///
/// A decision skipped at the filter-labels gate still carries its label
/// set: label application precedes the gate in the pipeline order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    /// Set when an abort point fired; reviewer/assignee requests are
    /// suppressed for the rest of the run.
    pub skipped: Option<SkipReason>,
    /// Labels to add, deduplicated by construction.
    pub labels: BTreeSet<String>,
    /// Reviewer logins to request.
    pub reviewers: Vec<String>,
    /// Assignee logins to add.
    pub assignees: Vec<String>,
}

impl Decision {
    /// Decision aborted before any label derivation.
    #[must_use]
    pub fn skip(reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Self::default()
        }
    }

    /// Whether reviewer/assignee selection ran.
    #[must_use]
    pub fn proceed(&self) -> bool {
        self.skipped.is_none()
    }
}
