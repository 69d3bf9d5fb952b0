// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;

#[yare::parameterized(
    retry = { "retry", ResumeAction::Retry },
    skip  = { "skip", ResumeAction::Skip },
    edit  = { "edit", ResumeAction::Edit },
    abort = { "abort", ResumeAction::Abort },
)]
fn parses_resume_actions(s: &str, expected: ResumeAction) {
    assert_eq!(s.parse::<ResumeAction>().unwrap(), expected);
}

#[test]
fn rejects_unknown_action() {
    let err = "continue".parse::<ResumeAction>().unwrap_err();
    assert_eq!(err, UnknownResumeAction("continue".into()));
}

#[test]
fn pause_info_defaults_to_full_action_set() {
    let info: PauseInfo = serde_json::from_str(r#"{"phase":"Phase 3"}"#).unwrap();
    assert_eq!(info.actions, ResumeAction::ALL.to_vec());
    assert_eq!(info.consecutive_failures, 0);
    assert!(info.findings.is_none());
}

#[test]
fn action_serde_round_trip() {
    let json = serde_json::to_string(&ResumeAction::Skip).unwrap();
    assert_eq!(json, "\"skip\"");
    let parsed: ResumeAction = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, ResumeAction::Skip);
}
