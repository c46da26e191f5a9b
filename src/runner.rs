//! Applies an evaluated decision through the collaborator API.

use tracing::{info, warn};

use crate::github::GithubClient;
use crate::models::decision::Decision;
use crate::models::snapshot::PullRequestSnapshot;

/// Apply `decision` to the pull request, in pipeline order.
///
/// Labels go out before the proceed flag is consulted, so a run halted at
/// the filter-labels gate still gets its derived labels. Every API call is
/// independently non-fatal: a failure is logged as a warning and later
/// steps still run. Partial application is an accepted outcome.
pub async fn apply_decision(
    client: &GithubClient,
    snapshot: &PullRequestSnapshot,
    decision: &Decision,
) {
    if !decision.labels.is_empty() {
        let labels: Vec<String> = decision.labels.iter().cloned().collect();
        match client.add_labels(snapshot.number, &labels).await {
            Ok(()) => info!(count = labels.len(), "labels applied"),
            Err(err) => warn!(%err, "failed to apply labels, continuing"),
        }
    }

    if let Some(ref reason) = decision.skipped {
        info!(%reason, "stopping before reviewer and assignee requests");
        return;
    }

    if !decision.reviewers.is_empty() {
        match client
            .request_reviewers(snapshot.number, &decision.reviewers)
            .await
        {
            Ok(()) => info!(count = decision.reviewers.len(), "reviewers requested"),
            Err(err) => warn!(%err, "failed to request reviewers, continuing"),
        }
    }

    if !decision.assignees.is_empty() {
        match client
            .add_assignees(snapshot.number, &decision.assignees)
            .await
        {
            Ok(()) => info!(count = decision.assignees.len(), "assignees added"),
            Err(err) => warn!(%err, "failed to add assignees"),
        }
    }
}
