//! Integration tests for decision application order and partial failure.

use std::collections::BTreeSet;

use httpmock::prelude::*;
use review_roster::github::GithubClient;
use review_roster::models::decision::{Decision, SkipReason};
use review_roster::models::snapshot::PullRequestSnapshot;
use review_roster::runner;
use serde_json::json;

fn client(server: &MockServer) -> GithubClient {
    GithubClient::new("test-token", "acme", "widgets")
        .unwrap()
        .with_api_base(server.base_url())
}

fn snapshot() -> PullRequestSnapshot {
    PullRequestSnapshot {
        number: 7,
        title: "Fix the flux capacitor".to_owned(),
        author: "alice".to_owned(),
        draft: false,
        base_ref: "main".to_owned(),
        requested_reviewers: Vec::new(),
        requested_teams: Vec::new(),
        labels: Vec::new(),
    }
}

fn labels(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[tokio::test]
async fn full_decision_applies_labels_reviewers_and_assignees() {
    let server = MockServer::start_async().await;
    let label_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/repos/acme/widgets/issues/7/labels");
            then.status(200).json_body(json!([]));
        })
        .await;
    let reviewer_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/7/requested_reviewers");
            then.status(201).json_body(json!({}));
        })
        .await;
    let assignee_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/issues/7/assignees");
            then.status(201).json_body(json!({}));
        })
        .await;

    let decision = Decision {
        skipped: None,
        labels: labels(&["release"]),
        reviewers: vec!["bob".to_owned()],
        assignees: vec!["carol".to_owned()],
    };

    runner::apply_decision(&client(&server), &snapshot(), &decision).await;

    label_mock.assert_async().await;
    reviewer_mock.assert_async().await;
    assignee_mock.assert_async().await;
}

#[tokio::test]
async fn gate_skip_applies_labels_but_no_requests() {
    let server = MockServer::start_async().await;
    let label_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/repos/acme/widgets/issues/7/labels");
            then.status(200).json_body(json!([]));
        })
        .await;
    let reviewer_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/7/requested_reviewers");
            then.status(201).json_body(json!({}));
        })
        .await;

    let decision = Decision {
        skipped: Some(SkipReason::FilterLabels),
        labels: labels(&["waiting"]),
        reviewers: Vec::new(),
        assignees: Vec::new(),
    };

    runner::apply_decision(&client(&server), &snapshot(), &decision).await;

    label_mock.assert_async().await;
    reviewer_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn label_failure_does_not_stop_reviewer_requests() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/repos/acme/widgets/issues/7/labels");
            then.status(500).body("boom");
        })
        .await;
    let reviewer_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/7/requested_reviewers");
            then.status(201).json_body(json!({}));
        })
        .await;

    let decision = Decision {
        skipped: None,
        labels: labels(&["release"]),
        reviewers: vec!["bob".to_owned()],
        assignees: Vec::new(),
    };

    runner::apply_decision(&client(&server), &snapshot(), &decision).await;

    reviewer_mock.assert_async().await;
}

#[tokio::test]
async fn empty_decision_touches_nothing() {
    let server = MockServer::start_async().await;
    let any_mock = server
        .mock_async(|when, then| {
            when.path_contains("/repos/acme/widgets");
            then.status(200).json_body(json!({}));
        })
        .await;

    runner::apply_decision(&client(&server), &snapshot(), &Decision::default()).await;

    any_mock.assert_hits_async(0).await;
}
