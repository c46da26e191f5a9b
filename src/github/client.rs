//! GitHub REST client exposing the four operations the core consumes.

use std::env;

use reqwest::{Client, Response};
use serde::Serialize;
use tracing::info;

use crate::event::PullRequestPayload;
use crate::models::snapshot::PullRequestSnapshot;
use crate::{AppError, Result};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("review-roster/", env!("CARGO_PKG_VERSION"));

/// Thin REST collaborator for one repository.
///
/// Exactly four capabilities are exposed: read the pull-request snapshot,
/// add labels, request reviewers, and add assignees. Token handling beyond
/// reading a ready-made bearer token is out of scope.
#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    api_base: String,
    token: String,
    repo_owner: String,
    repo_name: String,
}

#[derive(Debug, Serialize)]
struct RequestReviewersBody<'a> {
    reviewers: &'a [String],
}

#[derive(Debug, Serialize)]
struct AddAssigneesBody<'a> {
    assignees: &'a [String],
}

#[derive(Debug, Serialize)]
struct AddLabelsBody<'a> {
    labels: &'a [String],
}

impl GithubClient {
    /// Create a client for `repo_owner/repo_name` with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Github` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        token: impl Into<String>,
        repo_owner: impl Into<String>,
        repo_name: impl Into<String>,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| AppError::Github(format!("failed to create HTTP client: {err}")))?;

        Ok(Self {
            http,
            api_base: DEFAULT_API_BASE.to_owned(),
            token: token.into(),
            repo_owner: repo_owner.into(),
            repo_name: repo_name.into(),
        })
    }

    /// Create a client from `GITHUB_TOKEN` and `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if either variable is missing or
    /// `GITHUB_REPOSITORY` is not of the form `owner/name`.
    pub fn from_env() -> Result<Self> {
        let token = env::var("GITHUB_TOKEN")
            .map_err(|_| AppError::Config("GITHUB_TOKEN environment variable is required".into()))?;
        let repository = env::var("GITHUB_REPOSITORY").map_err(|_| {
            AppError::Config("GITHUB_REPOSITORY environment variable is required".into())
        })?;

        let (owner, name) = repository.split_once('/').ok_or_else(|| {
            AppError::Config(format!(
                "GITHUB_REPOSITORY must be of the form owner/name, got {repository:?}"
            ))
        })?;

        Self::new(token, owner, name)
    }

    /// Point the client at a different API base URL. Used by tests.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Fetch the current snapshot of a pull request.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Github` on transport failure, a non-success
    /// status, or an unparsable response body.
    pub async fn get_pull_request(&self, number: u64) -> Result<PullRequestSnapshot> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_base, self.repo_owner, self.repo_name, number
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .send()
            .await?;
        let response = ensure_success(response, "fetching pull request").await?;

        let payload: PullRequestPayload = response
            .json()
            .await
            .map_err(|err| AppError::Github(format!("failed to parse pull request: {err}")))?;

        info!(pr = payload.number, "fetched pull request snapshot");
        Ok(payload.into())
    }

    /// Add labels to a pull request.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Github` on transport failure or a non-success
    /// status.
    pub async fn add_labels(&self, number: u64, labels: &[String]) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.api_base, self.repo_owner, self.repo_name, number
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .json(&AddLabelsBody { labels })
            .send()
            .await?;
        ensure_success(response, "adding labels").await?;

        info!(pr = number, count = labels.len(), "labels added");
        Ok(())
    }

    /// Request reviews from the given logins.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Github` on transport failure or a non-success
    /// status.
    pub async fn request_reviewers(&self, number: u64, reviewers: &[String]) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}/requested_reviewers",
            self.api_base, self.repo_owner, self.repo_name, number
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .json(&RequestReviewersBody { reviewers })
            .send()
            .await?;
        ensure_success(response, "requesting reviewers").await?;

        info!(pr = number, count = reviewers.len(), "reviewers requested");
        Ok(())
    }

    /// Add assignees to a pull request.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Github` on transport failure or a non-success
    /// status.
    pub async fn add_assignees(&self, number: u64, assignees: &[String]) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/assignees",
            self.api_base, self.repo_owner, self.repo_name, number
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .json(&AddAssigneesBody { assignees })
            .send()
            .await?;
        ensure_success(response, "adding assignees").await?;

        info!(pr = number, count = assignees.len(), "assignees added");
        Ok(())
    }
}

async fn ensure_success(response: Response, operation: &str) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Github(format!(
        "{operation} failed: {status} - {body}"
    )))
}
