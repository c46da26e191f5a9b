//! CI event payload decoding.
//!
//! The hosting runtime hands the triggering webhook event over as a JSON
//! file. Only the `pull_request` object is of interest here; events
//! without one are fatal, since there is nothing to triage.

use serde::Deserialize;

use crate::models::snapshot::PullRequestSnapshot;
use crate::{AppError, Result};

/// Top-level webhook event payload.
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    /// Event action, e.g. `opened` or `ready_for_review`.
    pub action: Option<String>,
    /// Pull request the event refers to, when present.
    pub pull_request: Option<PullRequestPayload>,
}

/// The `pull_request` object of a webhook event or REST response.
#[derive(Debug, Deserialize)]
pub struct PullRequestPayload {
    /// Pull request number.
    pub number: u64,
    /// Pull request title.
    pub title: String,
    /// Draft flag; absent on older API versions.
    #[serde(default)]
    pub draft: bool,
    /// Pull request author.
    pub user: UserPayload,
    /// Target branch.
    pub base: RefPayload,
    /// Already-requested reviewers.
    #[serde(default)]
    pub requested_reviewers: Vec<UserPayload>,
    /// Already-requested team reviewers.
    #[serde(default)]
    pub requested_teams: Vec<TeamPayload>,
    /// Labels currently on the pull request.
    #[serde(default)]
    pub labels: Vec<LabelPayload>,
}

/// A user reference within a payload.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    /// Account login.
    pub login: String,
}

/// A team reference within a payload.
#[derive(Debug, Deserialize)]
pub struct TeamPayload {
    /// Team name.
    pub name: String,
}

/// A label reference within a payload.
#[derive(Debug, Deserialize)]
pub struct LabelPayload {
    /// Label name.
    pub name: String,
}

/// A branch reference within a payload.
#[derive(Debug, Deserialize)]
pub struct RefPayload {
    /// Branch name.
    #[serde(rename = "ref")]
    pub ref_name: String,
}

impl EventPayload {
    /// Decode an event payload from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Event` if the payload is not valid JSON of the
    /// expected shape.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Extract the pull-request snapshot from the event.
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingPullRequest` if the event carries no
    /// `pull_request` object.
    pub fn into_snapshot(self) -> Result<PullRequestSnapshot> {
        let pull_request = self.pull_request.ok_or_else(|| {
            AppError::MissingPullRequest("event has no pull_request object".into())
        })?;
        Ok(pull_request.into())
    }
}

impl From<PullRequestPayload> for PullRequestSnapshot {
    fn from(payload: PullRequestPayload) -> Self {
        Self {
            number: payload.number,
            title: payload.title,
            author: payload.user.login,
            draft: payload.draft,
            base_ref: payload.base.ref_name,
            requested_reviewers: payload
                .requested_reviewers
                .into_iter()
                .map(|user| user.login)
                .collect(),
            requested_teams: payload
                .requested_teams
                .into_iter()
                .map(|team| team.name)
                .collect(),
            labels: payload
                .labels
                .into_iter()
                .map(|label| label.name)
                .collect(),
        }
    }
}
