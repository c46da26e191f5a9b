//! Declarative triage configuration parsing and validation.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{AppError, Result};

/// Switch accepting either a boolean or a sentinel keyword.
///
/// `addAssignees` accepts `true`, `false`, or the literal `author`, which
/// assigns the pull-request author directly instead of sampling a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Toggle {
    /// Plain on/off switch.
    Switch(bool),
    /// Sentinel keyword value.
    Keyword(ToggleKeyword),
}

/// Keyword values accepted where a [`Toggle`] is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleKeyword {
    /// Assign the pull-request author directly.
    Author,
}

impl Toggle {
    /// Whether the feature is enabled at all.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Switch(false))
    }

    /// Whether the toggle carries the `author` sentinel.
    #[must_use]
    pub fn is_author(self) -> bool {
        matches!(self, Self::Keyword(ToggleKeyword::Author))
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::Switch(false)
    }
}

/// Label lists gating whether reviewer/assignee selection runs at all.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterLabels {
    /// The pull request must already carry at least one of these labels.
    #[serde(default)]
    pub include: Vec<String>,
    /// The pull request must carry none of these labels.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Triage configuration parsed from a YAML file.
///
/// Keys are camelCase to match the declarative schema consumed by the
/// hosting CI workflow. Map-like fields use sorted maps so the
/// "first matching prefix wins" rule is deterministic.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Whether to request reviewers at all.
    #[serde(default)]
    pub add_reviewers: Toggle,
    /// Whether to add assignees; `author` assigns the PR author directly.
    #[serde(default)]
    pub add_assignees: Toggle,
    /// Flat reviewer pool.
    #[serde(default)]
    pub reviewers: Vec<String>,
    /// Flat assignee pool. Falls back to `reviewers` when empty.
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Reviewers to sample; zero means the whole eligible pool.
    #[serde(default)]
    pub number_of_reviewers: usize,
    /// Assignees to sample; zero falls back to `numberOfReviewers`.
    #[serde(default)]
    pub number_of_assignees: usize,
    /// Titles containing any of these substrings are skipped outright.
    #[serde(default)]
    pub skip_keywords: Vec<String>,
    /// Draw reviewers from `reviewGroups` instead of the flat list.
    #[serde(default)]
    pub use_review_groups: bool,
    /// Draw assignees from `assigneeGroups` instead of the flat list.
    #[serde(default)]
    pub use_assignee_groups: bool,
    /// Named reviewer pools used in group mode.
    #[serde(default)]
    pub review_groups: BTreeMap<String, Vec<String>>,
    /// Named assignee pools used in group mode.
    #[serde(default)]
    pub assignee_groups: BTreeMap<String, Vec<String>>,
    /// Existing-label gate for the reviewer/assignee step.
    #[serde(default)]
    pub filter_labels: FilterLabels,
    /// Whether draft pull requests are processed.
    #[serde(default)]
    pub run_on_draft: bool,
    /// Requested reviewer or team name to label.
    #[serde(default)]
    pub reviewer_to_label_map: BTreeMap<String, String>,
    /// Target-branch prefix to label; first matching key wins.
    #[serde(default)]
    pub branches_to_label_map: BTreeMap<String, String>,
    /// Label added when the target branch is a release or hotfix branch.
    #[serde(default)]
    pub release_label: Option<String>,
    /// Label added to every non-draft pull request that passes the gates.
    #[serde(default)]
    pub waiting_for_review_label: Option<String>,
}

impl Config {
    /// Load and validate configuration from a YAML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid YAML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_yaml_str(&raw)
    }

    /// Parse configuration from a YAML string and validate it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Effective assignee pool: `assignees`, or `reviewers` when empty.
    #[must_use]
    pub fn assignee_pool(&self) -> &[String] {
        if self.assignees.is_empty() {
            &self.reviewers
        } else {
            &self.assignees
        }
    }

    /// Effective assignee count: `numberOfAssignees`, or
    /// `numberOfReviewers` when zero.
    #[must_use]
    pub fn assignee_count(&self) -> usize {
        if self.number_of_assignees == 0 {
            self.number_of_reviewers
        } else {
            self.number_of_assignees
        }
    }

    fn validate(&self) -> Result<()> {
        if self.use_review_groups && self.review_groups.is_empty() {
            return Err(AppError::Config(
                "useReviewGroups is set but reviewGroups is empty".into(),
            ));
        }

        if self.use_assignee_groups && self.assignee_groups.is_empty() {
            return Err(AppError::Config(
                "useAssigneeGroups is set but assigneeGroups is empty".into(),
            ));
        }

        Ok(())
    }
}
