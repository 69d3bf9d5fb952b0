// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;

#[yare::parameterized(
    pending   = { BuildStatus::Pending,   true },
    running   = { BuildStatus::Running,   true },
    paused    = { BuildStatus::Paused,    true },
    completed = { BuildStatus::Completed, false },
    failed    = { BuildStatus::Failed,    false },
    cancelled = { BuildStatus::Cancelled, false },
)]
fn active_iff_non_terminal(status: BuildStatus, active: bool) {
    assert_eq!(status.is_active(), active);
    assert_eq!(status.is_terminal(), !active);
}

#[test]
fn status_serde_uses_snake_case() {
    let json = serde_json::to_string(&BuildStatus::Running).unwrap();
    assert_eq!(json, "\"running\"");

    let parsed: BuildStatus = serde_json::from_str("\"cancelled\"").unwrap();
    assert_eq!(parsed, BuildStatus::Cancelled);
}

#[test]
fn build_deserializes_with_missing_optionals() {
    let json = r#"{"id":"b1","project_id":"p1","status":"running"}"#;
    let build: Build = serde_json::from_str(json).unwrap();

    assert_eq!(build.id, "b1");
    assert_eq!(build.phase, "");
    assert_eq!(build.loop_count, 0);
    assert!(build.error_detail.is_none());
    assert!(build.started_at_ms.is_none());
}

#[test]
fn build_builder_defaults() {
    let build = Build::builder().build();
    assert_eq!(build.status, BuildStatus::Running);
    assert_eq!(build.phase, "Phase 0");
    assert!(build.completed_at_ms.is_none());
}
