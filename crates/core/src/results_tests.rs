// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;

#[test]
fn invariant_verdict_serde_is_screaming() {
    let json = serde_json::to_string(&InvariantVerdict::Warn).unwrap();
    assert_eq!(json, "\"WARN\"");

    let parsed: InvariantVerdict = serde_json::from_str("\"FAIL\"").unwrap();
    assert_eq!(parsed, InvariantVerdict::Fail);
}

#[test]
fn dag_task_deserializes_sparse() {
    let task: DagTask = serde_json::from_str(r#"{"id":"t-1"}"#).unwrap();
    assert_eq!(task.id, "t-1");
    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.depends_on.is_empty());
    assert!(task.error.is_none());
}

#[test]
fn dag_progress_defaults_to_zero() {
    let progress: DagProgress = serde_json::from_str("{}").unwrap();
    assert_eq!(progress, DagProgress::default());
}

#[test]
fn verification_defaults() {
    let v: VerificationResult = serde_json::from_str(r#"{"passed":true}"#).unwrap();
    assert!(v.passed);
    assert_eq!(v.checks_passed, 0);
    assert_eq!(v.summary, "");
}
