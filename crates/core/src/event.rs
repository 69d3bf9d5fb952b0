// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Event vocabulary for the build stream.
//!
//! Serializes with the channel's `{"type": "...", "payload": {...}}` frame
//! format. Unknown type tags deserialize to `Unknown` so future server
//! event types never crash older clients. Every payload field that the
//! server might omit carries a serde default; the producer is not under
//! this client's control.

use crate::build::Build;
use crate::id::{ProjectId, TaskId};
use crate::pause::ResumeAction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildStartedPayload {
    pub project_id: ProjectId,
    pub build: Build,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildLogPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub level: crate::activity::LogLevel,
    /// Source tag used to classify the line into activity vs. output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseCompletePayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildCompletePayload {
    pub project_id: ProjectId,
    /// Absolute totals; when present they overwrite the running counters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_output_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildErrorPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub error_detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildCancelledPayload {
    pub project_id: ProjectId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildPausedPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub consecutive_failures: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<String>,
    /// Valid resume actions; empty means the full vocabulary.
    #[serde(default)]
    pub actions: Vec<ResumeAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildResumedPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub phase: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildInterjectionPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileManifestEntry {
    pub path: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub estimated_lines: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileManifestPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub files: Vec<FileManifestEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileGeneratingPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileGeneratedPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub actual_lines: u64,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileAuditedPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileFixPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditResultPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub findings: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationResultPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub checks_passed: u32,
    #[serde(default)]
    pub checks_failed: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernancePayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub rule: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvariantsPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub invariants: Vec<crate::results::InvariantCheck>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagInitializedPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub tasks: Vec<DagTaskEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagTaskEntry {
    pub id: TaskId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub depends_on: Vec<TaskId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub project_id: ProjectId,
    pub task_id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagProgressPayload {
    pub project_id: ProjectId,
    #[serde(flatten)]
    pub progress: crate::results::DagProgress,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostTickerPayload {
    pub project_id: ProjectId,
    #[serde(flatten)]
    pub cost: crate::tokens::LiveCost,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostAlertPayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenUpdatePayload {
    pub project_id: ProjectId,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextResetPayload {
    pub project_id: ProjectId,
}

/// Events delivered over the build stream.
///
/// The vocabulary is a closed set; the `Unknown` catch-all absorbs anything
/// the server adds later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum BuildEvent {
    #[serde(rename = "build_started")]
    BuildStarted(BuildStartedPayload),

    #[serde(rename = "build_log")]
    BuildLog(BuildLogPayload),

    #[serde(rename = "phase_complete")]
    PhaseComplete(PhaseCompletePayload),

    #[serde(rename = "build_complete")]
    BuildComplete(BuildCompletePayload),

    #[serde(rename = "build_error")]
    BuildError(BuildErrorPayload),

    #[serde(rename = "build_cancelled")]
    BuildCancelled(BuildCancelledPayload),

    #[serde(rename = "build_paused")]
    BuildPaused(BuildPausedPayload),

    #[serde(rename = "build_resumed")]
    BuildResumed(BuildResumedPayload),

    #[serde(rename = "build_interjection")]
    BuildInterjection(BuildInterjectionPayload),

    #[serde(rename = "file_manifest")]
    FileManifest(FileManifestPayload),

    #[serde(rename = "file_generating")]
    FileGenerating(FileGeneratingPayload),

    #[serde(rename = "file_generated")]
    FileGenerated(FileGeneratedPayload),

    #[serde(rename = "file_audited")]
    FileAudited(FileAuditedPayload),

    #[serde(rename = "file_fixing")]
    FileFixing(FileFixPayload),

    #[serde(rename = "file_fixed")]
    FileFixed(FileFixPayload),

    #[serde(rename = "audit_result")]
    AuditResult(AuditResultPayload),

    #[serde(rename = "verification_result")]
    VerificationResult(VerificationResultPayload),

    #[serde(rename = "governance_pass")]
    GovernancePass(GovernancePayload),

    #[serde(rename = "governance_fail")]
    GovernanceFail(GovernancePayload),

    #[serde(rename = "invariants_updated")]
    InvariantsUpdated(InvariantsPayload),

    #[serde(rename = "dag_initialized")]
    DagInitialized(DagInitializedPayload),

    #[serde(rename = "task_started")]
    TaskStarted(TaskPayload),

    #[serde(rename = "task_completed")]
    TaskCompleted(TaskPayload),

    #[serde(rename = "task_failed")]
    TaskFailed(TaskPayload),

    #[serde(rename = "dag_progress")]
    DagProgress(DagProgressPayload),

    #[serde(rename = "cost_ticker")]
    CostTicker(CostTickerPayload),

    #[serde(rename = "cost_warning")]
    CostWarning(CostAlertPayload),

    #[serde(rename = "cost_exceeded")]
    CostExceeded(CostAlertPayload),

    #[serde(rename = "token_update")]
    TokenUpdate(TokenUpdatePayload),

    #[serde(rename = "context_reset")]
    ContextReset(ContextResetPayload),

    /// Catch-all for unknown event types (forward compatibility)
    #[serde(other, skip_serializing)]
    Unknown,
}

impl BuildEvent {
    /// Project the event addresses; `None` only for `Unknown`.
    pub fn project_id(&self) -> Option<&ProjectId> {
        use BuildEvent::*;
        match self {
            BuildStarted(p) => Some(&p.project_id),
            BuildLog(p) => Some(&p.project_id),
            PhaseComplete(p) => Some(&p.project_id),
            BuildComplete(p) => Some(&p.project_id),
            BuildError(p) => Some(&p.project_id),
            BuildCancelled(p) => Some(&p.project_id),
            BuildPaused(p) => Some(&p.project_id),
            BuildResumed(p) => Some(&p.project_id),
            BuildInterjection(p) => Some(&p.project_id),
            FileManifest(p) => Some(&p.project_id),
            FileGenerating(p) => Some(&p.project_id),
            FileGenerated(p) => Some(&p.project_id),
            FileAudited(p) => Some(&p.project_id),
            FileFixing(p) => Some(&p.project_id),
            FileFixed(p) => Some(&p.project_id),
            AuditResult(p) => Some(&p.project_id),
            VerificationResult(p) => Some(&p.project_id),
            GovernancePass(p) => Some(&p.project_id),
            GovernanceFail(p) => Some(&p.project_id),
            InvariantsUpdated(p) => Some(&p.project_id),
            DagInitialized(p) => Some(&p.project_id),
            TaskStarted(p) => Some(&p.project_id),
            TaskCompleted(p) => Some(&p.project_id),
            TaskFailed(p) => Some(&p.project_id),
            DagProgress(p) => Some(&p.project_id),
            CostTicker(p) => Some(&p.project_id),
            CostWarning(p) => Some(&p.project_id),
            CostExceeded(p) => Some(&p.project_id),
            TokenUpdate(p) => Some(&p.project_id),
            ContextReset(p) => Some(&p.project_id),
            Unknown => None,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
