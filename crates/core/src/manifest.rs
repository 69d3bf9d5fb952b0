// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! File manifest for plan-execute build phases.

use serde::{Deserialize, Serialize};

/// Generation status of one manifest file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    #[default]
    Pending,
    Generating,
    Done,
    Error,
}

crate::simple_display! {
    FileStatus {
        Pending => "pending",
        Generating => "generating",
        Done => "done",
        Error => "error",
    }
}

/// Audit sub-status of one manifest file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    #[default]
    Pending,
    Pass,
    Fail,
    Fixing,
    Fixed,
}

crate::simple_display! {
    AuditStatus {
        Pending => "pending",
        Pass => "pass",
        Fail => "fail",
        Fixing => "fixing",
        Fixed => "fixed",
    }
}

/// One source file planned or produced within the current phase.
///
/// The path is the natural key; the manifest never holds two entries for
/// the same path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub status: FileStatus,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub estimated_lines: u64,
    #[serde(default)]
    pub actual_lines: u64,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub audit_status: AuditStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_findings: Option<String>,
}

impl ManifestFile {
    /// A bare row created from a file event that raced ahead of the
    /// authoritative `file_manifest` announcement.
    pub fn placeholder(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

crate::builder! {
    pub struct ManifestFileBuilder => ManifestFile {
        into {
            path: String = "src/main.ts",
            purpose: String = "entry point",
            language: String = "typescript",
        }
        set {
            status: FileStatus = FileStatus::Pending,
            estimated_lines: u64 = 100,
            actual_lines: u64 = 0,
            input_tokens: u64 = 0,
            output_tokens: u64 = 0,
            audit_status: AuditStatus = AuditStatus::Pending,
        }
        option {
            audit_findings: String = None,
        }
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
