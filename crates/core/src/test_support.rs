// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Shared fixtures for reducer tests: a phase catalogue, a started view,
//! and shorthand event constructors.

use crate::build::{Build, BuildStatus};
use crate::clock::Clock;
use crate::phase::Phase;
use crate::view::BuildView;

/// A catalogue of `n` phases numbered 0..n.
pub fn catalogue(n: usize) -> Vec<Phase> {
    (0..n)
        .map(|number| Phase {
            number,
            name: format!("Phase {number}"),
            objective: String::new(),
            deliverables: Vec::new(),
        })
        .collect()
}

/// A view for project "p-1" with six phases and a running build "b1".
pub fn started_view(clock: &impl Clock) -> BuildView {
    let mut view = BuildView::new("p-1".into(), catalogue(6));
    view.apply(&event::build_started("p-1", "b1"), clock);
    view
}

/// Shorthand constructors for stream events.
pub mod event {
    use super::*;
    use crate::event::*;

    pub fn running_build(project: &str, build_id: &str) -> Build {
        Build {
            id: build_id.into(),
            project_id: project.into(),
            phase: "Phase 0".into(),
            status: BuildStatus::Running,
            loop_count: 0,
            started_at_ms: Some(1_000),
            completed_at_ms: None,
            error_detail: None,
            target_type: None,
            target_ref: None,
            created_at_ms: 1_000,
        }
    }

    pub fn build_started(project: &str, build_id: &str) -> BuildEvent {
        BuildEvent::BuildStarted(BuildStartedPayload {
            project_id: project.into(),
            build: running_build(project, build_id),
        })
    }

    pub fn phase_complete(project: &str, phase: &str, input: u64, output: u64) -> BuildEvent {
        BuildEvent::PhaseComplete(PhaseCompletePayload {
            project_id: project.into(),
            phase: phase.into(),
            input_tokens: input,
            output_tokens: output,
            elapsed_ms: 1_000,
        })
    }

    pub fn build_complete_with_totals(project: &str, input: u64, output: u64) -> BuildEvent {
        BuildEvent::BuildComplete(BuildCompletePayload {
            project_id: project.into(),
            total_input_tokens: Some(input),
            total_output_tokens: Some(output),
            completed_at_ms: Some(2_000),
        })
    }

    pub fn build_error(project: &str, detail: &str) -> BuildEvent {
        BuildEvent::BuildError(BuildErrorPayload {
            project_id: project.into(),
            error_detail: detail.into(),
        })
    }

    pub fn build_log(project: &str, message: &str, source: Option<&str>) -> BuildEvent {
        BuildEvent::BuildLog(BuildLogPayload {
            project_id: project.into(),
            message: message.into(),
            level: crate::activity::LogLevel::Info,
            source: source.map(str::to_string),
        })
    }

    pub fn build_paused(
        project: &str,
        phase: &str,
        consecutive_failures: u32,
        findings: Option<&str>,
    ) -> BuildEvent {
        BuildEvent::BuildPaused(BuildPausedPayload {
            project_id: project.into(),
            phase: phase.into(),
            consecutive_failures,
            findings: findings.map(str::to_string),
            actions: Vec::new(),
        })
    }

    pub fn build_resumed(project: &str, phase: &str) -> BuildEvent {
        BuildEvent::BuildResumed(BuildResumedPayload {
            project_id: project.into(),
            phase: phase.into(),
        })
    }

    pub fn file_manifest(project: &str, paths: &[&str]) -> BuildEvent {
        BuildEvent::FileManifest(FileManifestPayload {
            project_id: project.into(),
            phase: "Phase 0".into(),
            files: paths
                .iter()
                .map(|path| FileManifestEntry {
                    path: (*path).to_string(),
                    ..FileManifestEntry::default()
                })
                .collect(),
        })
    }

    pub fn file_generating(project: &str, path: &str) -> BuildEvent {
        BuildEvent::FileGenerating(FileGeneratingPayload {
            project_id: project.into(),
            path: path.into(),
        })
    }

    pub fn file_generated(project: &str, path: &str, input: u64, output: u64) -> BuildEvent {
        BuildEvent::FileGenerated(FileGeneratedPayload {
            project_id: project.into(),
            path: path.into(),
            actual_lines: 100,
            input_tokens: input,
            output_tokens: output,
        })
    }

    pub fn file_audited(
        project: &str,
        path: &str,
        passed: bool,
        findings: Option<&str>,
    ) -> BuildEvent {
        BuildEvent::FileAudited(FileAuditedPayload {
            project_id: project.into(),
            path: path.into(),
            passed,
            findings: findings.map(str::to_string),
        })
    }

    pub fn governance_pass(project: &str, rule: &str, detail: &str) -> BuildEvent {
        BuildEvent::GovernancePass(GovernancePayload {
            project_id: project.into(),
            rule: rule.into(),
            detail: detail.into(),
        })
    }

    pub fn governance_fail(project: &str, rule: &str, detail: &str) -> BuildEvent {
        BuildEvent::GovernanceFail(GovernancePayload {
            project_id: project.into(),
            rule: rule.into(),
            detail: detail.into(),
        })
    }

    pub fn dag_initialized(project: &str, task_ids: &[&str]) -> BuildEvent {
        BuildEvent::DagInitialized(DagInitializedPayload {
            project_id: project.into(),
            tasks: task_ids
                .iter()
                .map(|id| DagTaskEntry {
                    id: (*id).into(),
                    name: format!("task {id}"),
                    depends_on: Vec::new(),
                })
                .collect(),
        })
    }

    pub fn task_started(project: &str, task_id: &str) -> BuildEvent {
        BuildEvent::TaskStarted(TaskPayload {
            project_id: project.into(),
            task_id: task_id.into(),
            error: None,
        })
    }

    pub fn task_failed(project: &str, task_id: &str, error: &str) -> BuildEvent {
        BuildEvent::TaskFailed(TaskPayload {
            project_id: project.into(),
            task_id: task_id.into(),
            error: Some(error.into()),
        })
    }

    pub fn cost_warning(project: &str, message: &str) -> BuildEvent {
        BuildEvent::CostWarning(CostAlertPayload {
            project_id: project.into(),
            message: message.into(),
        })
    }

    pub fn cost_exceeded(project: &str, message: &str) -> BuildEvent {
        BuildEvent::CostExceeded(CostAlertPayload {
            project_id: project.into(),
            message: message.into(),
        })
    }
}
