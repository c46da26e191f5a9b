//! GitHub REST collaborator layer.

pub mod client;

pub use client::GithubClient;
