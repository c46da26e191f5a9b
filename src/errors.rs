//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all domain failure modes.
///
/// Only two kinds abort a run: [`AppError::Config`] (group mode enabled
/// without a group map, or an unreadable configuration) and
/// [`AppError::MissingPullRequest`] (the triggering event carries no
/// pull-request context). Everything else is logged and tolerated at the
/// call site.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Event payload decoding failure.
    Event(String),
    /// Triggering event has no pull-request context.
    MissingPullRequest(String),
    /// GitHub REST API failure.
    Github(String),
    /// File-system or I/O operation failure.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Event(msg) => write!(f, "event: {msg}"),
            Self::MissingPullRequest(msg) => write!(f, "missing pull request: {msg}"),
            Self::Github(msg) => write!(f, "github: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Event(format!("invalid event payload: {err}"))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Github(err.to_string())
    }
}
