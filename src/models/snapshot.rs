//! Immutable pull-request view consumed by the rule pipeline.

/// Snapshot of the pull request under evaluation.
///
/// Captured once per invocation, either from the CI event payload or from
/// the REST read accessor, and never mutated afterwards. The filter-labels
/// gate in particular observes `labels` as they were at capture time, not
/// the labels added later in the same run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSnapshot {
    /// Pull request number.
    pub number: u64,
    /// Pull request title.
    pub title: String,
    /// Login of the pull-request author.
    pub author: String,
    /// Whether the pull request is a draft.
    pub draft: bool,
    /// Target branch ref, e.g. `main` or `release/1.0`.
    pub base_ref: String,
    /// Logins of already-requested reviewers.
    pub requested_reviewers: Vec<String>,
    /// Names of already-requested team reviewers.
    pub requested_teams: Vec<String>,
    /// Labels present on the pull request at capture time.
    pub labels: Vec<String>,
}
