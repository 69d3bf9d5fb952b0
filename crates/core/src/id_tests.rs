// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;

#[test]
fn project_id_display() {
    let id = ProjectId::new("proj-42");
    assert_eq!(id.to_string(), "proj-42");
}

#[test]
fn project_id_equality() {
    let id1 = ProjectId::new("p-1");
    let id2 = ProjectId::new("p-1");
    let id3 = ProjectId::new("p-2");

    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
    assert_eq!(id1, "p-1");
}

#[test]
fn build_id_from_str() {
    let id: BuildId = "b-7".into();
    assert_eq!(id.as_str(), "b-7");
}

#[test]
fn task_id_serde() {
    let id = TaskId::new("t-3");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"t-3\"");

    let parsed: TaskId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn default_id_is_empty() {
    assert!(ProjectId::default().is_empty());
    assert!(!ProjectId::new("x").is_empty());
}
