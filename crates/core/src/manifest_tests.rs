// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;

#[test]
fn placeholder_starts_pending() {
    let file = ManifestFile::placeholder("a.ts");
    assert_eq!(file.path, "a.ts");
    assert_eq!(file.status, FileStatus::Pending);
    assert_eq!(file.audit_status, AuditStatus::Pending);
    assert!(file.audit_findings.is_none());
}

#[test]
fn manifest_file_deserializes_path_only() {
    let file: ManifestFile = serde_json::from_str(r#"{"path":"lib/util.ts"}"#).unwrap();
    assert_eq!(file.path, "lib/util.ts");
    assert_eq!(file.status, FileStatus::Pending);
    assert_eq!(file.estimated_lines, 0);
}

#[test]
fn status_display() {
    assert_eq!(FileStatus::Generating.to_string(), "generating");
    assert_eq!(AuditStatus::Fixing.to_string(), "fixing");
}

#[test]
fn builder_defaults() {
    let file = ManifestFile::builder().build();
    assert_eq!(file.path, "src/main.ts");
    assert_eq!(file.language, "typescript");
}
