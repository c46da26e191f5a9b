//! Unit tests for the decision model and skip reasons.

use review_roster::models::decision::{Decision, SkipReason};

#[test]
fn skip_carries_nothing_else() {
    let decision = Decision::skip(SkipReason::Draft);
    assert!(!decision.proceed());
    assert!(decision.labels.is_empty());
    assert!(decision.reviewers.is_empty());
    assert!(decision.assignees.is_empty());
}

#[test]
fn default_decision_proceeds() {
    let decision = Decision::default();
    assert!(decision.proceed());
}

#[test]
fn label_set_deduplicates() {
    let mut decision = Decision::default();
    assert!(decision.labels.insert("release".to_owned()));
    assert!(!decision.labels.insert("release".to_owned()));
    assert_eq!(decision.labels.len(), 1);
}

#[test]
fn skip_reasons_render_for_logs() {
    assert_eq!(
        SkipReason::SkipKeyword("wip".to_owned()).to_string(),
        "title contains skip keyword \"wip\""
    );
    assert_eq!(SkipReason::Draft.to_string(), "draft pull request");
    assert_eq!(
        SkipReason::FilterLabels.to_string(),
        "existing labels failed the filter"
    );
}
