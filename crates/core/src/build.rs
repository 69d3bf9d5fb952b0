// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Build record and status.

use crate::id::{BuildId, ProjectId};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a build attempt.
///
/// Transitions are monotonic except `Paused` → `Running` (resume); a retry
/// produces a new `Build` record rather than reviving a failed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    Pending,
    Running,
    Paused,
    Completed,
    Failed,
    Cancelled,
}

impl BuildStatus {
    /// A build counts as active while it can still make progress.
    pub fn is_active(&self) -> bool {
        matches!(self, BuildStatus::Pending | BuildStatus::Running | BuildStatus::Paused)
    }

    /// Terminal statuses never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BuildStatus::Completed | BuildStatus::Failed | BuildStatus::Cancelled)
    }
}

crate::simple_display! {
    BuildStatus {
        Pending => "pending",
        Running => "running",
        Paused => "paused",
        Completed => "completed",
        Failed => "failed",
        Cancelled => "cancelled",
    }
}

/// One active or historical build attempt for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub id: BuildId,
    pub project_id: ProjectId,
    /// Current phase label, free text, typically "Phase N".
    #[serde(default)]
    pub phase: String,
    pub status: BuildStatus,
    #[serde(default)]
    pub loop_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    /// Target type, e.g. "push to existing repo".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_ref: Option<String>,
    #[serde(default)]
    pub created_at_ms: u64,
}

crate::builder! {
    pub struct BuildBuilder => Build {
        into {
            id: BuildId = "b-1",
            project_id: ProjectId = "p-1",
            phase: String = "Phase 0",
        }
        set {
            status: BuildStatus = BuildStatus::Running,
            loop_count: u32 = 0,
            created_at_ms: u64 = 0,
        }
        option {
            started_at_ms: u64 = None,
            completed_at_ms: u64 = None,
            error_detail: String = None,
            target_type: String = None,
            target_ref: String = None,
        }
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
