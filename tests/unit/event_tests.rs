//! Unit tests for CI event payload decoding.

use review_roster::event::EventPayload;
use review_roster::AppError;
use serde_json::json;

#[test]
fn full_payload_decodes_into_snapshot() {
    let raw = json!({
        "action": "opened",
        "pull_request": {
            "number": 7,
            "title": "Fix the flux capacitor",
            "draft": true,
            "user": { "login": "alice" },
            "base": { "ref": "release/1.0" },
            "requested_reviewers": [ { "login": "bob" } ],
            "requested_teams": [ { "name": "Enterprise Squad" } ],
            "labels": [ { "name": "bug" }, { "name": "Team: Red" } ]
        }
    })
    .to_string();

    let snapshot = EventPayload::from_json_str(&raw)
        .unwrap()
        .into_snapshot()
        .unwrap();

    assert_eq!(snapshot.number, 7);
    assert_eq!(snapshot.title, "Fix the flux capacitor");
    assert!(snapshot.draft);
    assert_eq!(snapshot.author, "alice");
    assert_eq!(snapshot.base_ref, "release/1.0");
    assert_eq!(snapshot.requested_reviewers, vec!["bob"]);
    assert_eq!(snapshot.requested_teams, vec!["Enterprise Squad"]);
    assert_eq!(snapshot.labels, vec!["bug", "Team: Red"]);
}

#[test]
fn optional_fields_default_when_absent() {
    let raw = json!({
        "pull_request": {
            "number": 1,
            "title": "Minimal",
            "user": { "login": "alice" },
            "base": { "ref": "main" }
        }
    })
    .to_string();

    let snapshot = EventPayload::from_json_str(&raw)
        .unwrap()
        .into_snapshot()
        .unwrap();

    assert!(!snapshot.draft);
    assert!(snapshot.requested_reviewers.is_empty());
    assert!(snapshot.requested_teams.is_empty());
    assert!(snapshot.labels.is_empty());
}

#[test]
fn event_without_pull_request_is_fatal() {
    let raw = json!({ "action": "push" }).to_string();

    let err = EventPayload::from_json_str(&raw)
        .unwrap()
        .into_snapshot()
        .unwrap_err();

    assert!(matches!(err, AppError::MissingPullRequest(_)));
    assert!(err.to_string().contains("missing pull request"));
}

#[test]
fn malformed_json_is_an_event_error() {
    let err = EventPayload::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, AppError::Event(_)));
}
