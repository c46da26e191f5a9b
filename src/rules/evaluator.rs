//! Linear rule pipeline with early abort points.
//!
//! Evaluation is pure: it reads the snapshot and configuration and
//! produces a [`Decision`] without touching the collaborator API. The
//! runner applies the decision afterwards in the same step order, so the
//! filter-labels gate always observes pre-labeling state.

use rand::Rng;
use tracing::{debug, info, info_span};

use crate::config::Config;
use crate::models::decision::{Decision, SkipReason};
use crate::models::snapshot::PullRequestSnapshot;
use crate::rules::selection;

/// Evaluate the configured rules against one pull-request snapshot.
///
/// Pipeline order:
/// 1. Skip-keyword check (abort).
/// 2. Draft gate (abort).
/// 3. Branch-prefix label.
/// 4. Requested-reviewer and team labels.
/// 5. Release/hotfix label.
/// 6. Waiting-for-review label.
/// 7. Filter-labels gate against the snapshot's existing labels (abort,
///    but the label set accumulated so far is kept).
/// 8. Reviewer selection.
/// 9. Assignee selection.
#[must_use]
pub fn evaluate<R: Rng>(
    snapshot: &PullRequestSnapshot,
    config: &Config,
    rng: &mut R,
) -> Decision {
    let _span = info_span!("evaluate", pr = snapshot.number).entered();

    // ── Abort points: nothing is touched past here ──────
    for keyword in &config.skip_keywords {
        if snapshot.title.contains(keyword.as_str()) {
            info!(keyword = %keyword, "title contains skip keyword, skipping");
            return Decision::skip(SkipReason::SkipKeyword(keyword.clone()));
        }
    }

    if snapshot.draft && !config.run_on_draft {
        info!("draft pull request and runOnDraft is disabled, skipping");
        return Decision::skip(SkipReason::Draft);
    }

    let mut decision = Decision::default();

    // ── Label derivation ────────────────────────────────
    if let Some((prefix, label)) = config
        .branches_to_label_map
        .iter()
        .find(|(prefix, _)| snapshot.base_ref.starts_with(prefix.as_str()))
    {
        debug!(prefix = %prefix, label = %label, "branch prefix matched");
        decision.labels.insert(label.clone());
    }

    for name in snapshot
        .requested_reviewers
        .iter()
        .chain(&snapshot.requested_teams)
    {
        if let Some(label) = config.reviewer_to_label_map.get(name) {
            debug!(reviewer = %name, label = %label, "reviewer mapped to label");
            decision.labels.insert(label.clone());
        }
    }

    if let Some(ref label) = config.release_label {
        if snapshot.base_ref.starts_with("release") || snapshot.base_ref.starts_with("hotfix") {
            decision.labels.insert(label.clone());
        }
    }

    if let Some(ref label) = config.waiting_for_review_label {
        if !snapshot.draft {
            decision.labels.insert(label.clone());
        }
    }

    // ── Filter-labels gate ──────────────────────────────
    // Checked against the labels the snapshot already carried, never the
    // ones derived above. A gate failure still keeps the label set.
    if let Some(reason) = filter_gate(snapshot, config) {
        info!("existing labels failed the filter gate");
        decision.skipped = Some(reason);
        return decision;
    }

    // ── Reviewer selection ──────────────────────────────
    if config.add_reviewers.is_enabled() {
        decision.reviewers = if config.use_review_groups {
            selection::choose_from_groups(
                &config.review_groups,
                config.number_of_reviewers,
                &snapshot.author,
                rng,
            )
        } else {
            selection::choose_users(
                &config.reviewers,
                config.number_of_reviewers,
                &snapshot.author,
                rng,
            )
        };
    }

    // ── Assignee selection ──────────────────────────────
    if config.add_assignees.is_enabled() {
        decision.assignees = if config.add_assignees.is_author() {
            vec![snapshot.author.clone()]
        } else if config.use_assignee_groups {
            selection::choose_from_groups(
                &config.assignee_groups,
                config.assignee_count(),
                &snapshot.author,
                rng,
            )
        } else {
            selection::choose_users(
                config.assignee_pool(),
                config.assignee_count(),
                &snapshot.author,
                rng,
            )
        };
    }

    decision
}

fn filter_gate(snapshot: &PullRequestSnapshot, config: &Config) -> Option<SkipReason> {
    let filter = &config.filter_labels;

    if !filter.include.is_empty()
        && !snapshot
            .labels
            .iter()
            .any(|label| filter.include.contains(label))
    {
        return Some(SkipReason::FilterLabels);
    }

    if !filter.exclude.is_empty()
        && snapshot
            .labels
            .iter()
            .any(|label| filter.exclude.contains(label))
    {
        return Some(SkipReason::FilterLabels);
    }

    None
}
