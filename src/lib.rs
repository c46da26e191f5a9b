#![forbid(unsafe_code)]

//! Pull request triage automation.
//!
//! Given a declarative configuration and a snapshot of the triggering
//! pull request, decide whether to proceed, which labels to add, and
//! which reviewers and assignees to request, then apply the decision via
//! the GitHub REST API.

pub mod config;
pub mod errors;
pub mod event;
pub mod github;
pub mod models;
pub mod rules;
pub mod runner;

pub use config::Config;
pub use errors::{AppError, Result};
