// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! The build state reducer.
//!
//! [`BuildView`] is the renderable state of one project's build, folded
//! from a seeded snapshot plus the event stream. `apply` is total: it
//! never fails, never performs I/O, and absorbs malformed payloads by
//! defaulting. Events addressing a different project are discarded here
//! even when an upstream subscription already filtered — the reducer owns
//! that guarantee.
//!
//! Update policy is deliberately mixed: status transitions and result
//! projections are idempotent set operations, while the token-accumulation
//! paths (`phase_complete`, `file_generated`) are additive and will
//! double-count a truly redelivered event. The stream carries no
//! deduplication key, and an additive no-op guard would undercount real
//! usage, so the asymmetry stands.

use crate::activity::{classify_source, ActivityEntry, LogCategory, LogLevel};
use crate::build::{Build, BuildStatus};
use crate::clock::Clock;
use crate::event::*;
use crate::id::ProjectId;
use crate::interject::InterjectionLedger;
use crate::manifest::{AuditStatus, FileStatus, ManifestFile};
use crate::pause::{PauseInfo, ResumeAction};
use crate::phase::{parse_phase_number, Phase, PhaseState, PhaseStatus};
use crate::results::{
    AuditResult, DagProgress, DagTask, GovernanceResult, InvariantCheck, TaskStatus,
    VerificationResult,
};
use crate::tokens::{LiveCost, TokenTotals};
use serde::{Deserialize, Serialize};

/// Renderable state of one project's build session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildView {
    pub project_id: ProjectId,
    /// True when the status fetch reported that no build exists yet.
    pub no_build: bool,
    pub build: Option<Build>,
    /// Server-defined phase catalogue, ordered by number.
    pub phases: Vec<Phase>,
    /// Derived per-phase state, parallel to `phases`.
    pub phase_states: Vec<PhaseState>,
    pub activity: Vec<ActivityEntry>,
    /// File manifest for the current phase (plan-execute mode).
    pub manifest: Vec<ManifestFile>,
    pub audit: Option<AuditResult>,
    pub verification: Option<VerificationResult>,
    pub governance: Option<GovernanceResult>,
    pub invariants: Vec<InvariantCheck>,
    pub tasks: Vec<DagTask>,
    pub dag_progress: Option<DagProgress>,
    /// Cumulative token totals (ADD on deltas, REPLACE on absolutes).
    pub totals: TokenTotals,
    /// Peak single-call context window usage; reset only by `context_reset`.
    pub context_window_tokens: u64,
    pub live_cost: Option<LiveCost>,
    /// Advisory cost banner; sticky until a fresh build start.
    pub cost_warning: Option<String>,
    /// Blocking cost banner; sticky until a fresh build start.
    pub cost_exceeded: Option<String>,
    pub pause: Option<PauseInfo>,
    pub interjections: InterjectionLedger,
}

impl BuildView {
    /// An empty view for a project, seeded with the phase catalogue.
    pub fn new(project_id: ProjectId, phases: Vec<Phase>) -> Self {
        let phase_states = vec![PhaseState::default(); phases.len()];
        Self {
            project_id,
            no_build: false,
            build: None,
            phases,
            phase_states,
            activity: Vec::new(),
            manifest: Vec::new(),
            audit: None,
            verification: None,
            governance: None,
            invariants: Vec::new(),
            tasks: Vec::new(),
            dag_progress: None,
            totals: TokenTotals::default(),
            context_window_tokens: 0,
            live_cost: None,
            cost_warning: None,
            cost_exceeded: None,
            pause: None,
            interjections: InterjectionLedger::default(),
        }
    }

    /// The view for a project with no build yet: nothing else populated.
    pub fn no_build(project_id: ProjectId) -> Self {
        let mut view = Self::new(project_id, Vec::new());
        view.no_build = true;
        view
    }

    /// Fold one event into the view. Total and infallible.
    pub fn apply(&mut self, event: &BuildEvent, clock: &impl Clock) {
        if event.project_id() != Some(&self.project_id) {
            return;
        }
        let now_ms = clock.epoch_ms();

        match event {
            BuildEvent::BuildStarted(p) => self.on_build_started(p, now_ms),
            BuildEvent::BuildLog(p) => self.on_build_log(p, now_ms),
            BuildEvent::PhaseComplete(p) => self.on_phase_complete(p, now_ms),
            BuildEvent::BuildComplete(p) => self.on_build_complete(p, now_ms),
            BuildEvent::BuildError(p) => self.on_build_error(p, now_ms),
            BuildEvent::BuildCancelled(_) => self.on_build_cancelled(now_ms),
            BuildEvent::BuildPaused(p) => self.on_build_paused(p, now_ms),
            BuildEvent::BuildResumed(p) => self.on_build_resumed(p, now_ms),
            BuildEvent::BuildInterjection(p) => self.on_build_interjection(p, now_ms),
            BuildEvent::FileManifest(p) => self.on_file_manifest(p),
            BuildEvent::FileGenerating(p) => self.on_file_generating(p),
            BuildEvent::FileGenerated(p) => self.on_file_generated(p),
            BuildEvent::FileAudited(p) => self.on_file_audited(p),
            BuildEvent::FileFixing(p) => self.set_audit_status(&p.path, AuditStatus::Fixing),
            BuildEvent::FileFixed(p) => self.set_audit_status(&p.path, AuditStatus::Fixed),
            BuildEvent::AuditResult(p) => {
                self.audit = Some(AuditResult {
                    passed: p.passed,
                    findings: p.findings.clone(),
                });
            }
            BuildEvent::VerificationResult(p) => {
                self.verification = Some(VerificationResult {
                    passed: p.passed,
                    summary: p.summary.clone(),
                    checks_passed: p.checks_passed,
                    checks_failed: p.checks_failed,
                });
            }
            BuildEvent::GovernancePass(p) => self.set_governance(p, true),
            BuildEvent::GovernanceFail(p) => self.set_governance(p, false),
            BuildEvent::InvariantsUpdated(p) => self.invariants = p.invariants.clone(),
            BuildEvent::DagInitialized(p) => self.on_dag_initialized(p),
            BuildEvent::TaskStarted(p) => self.set_task_status(p, TaskStatus::Running),
            BuildEvent::TaskCompleted(p) => self.set_task_status(p, TaskStatus::Completed),
            BuildEvent::TaskFailed(p) => self.set_task_status(p, TaskStatus::Failed),
            BuildEvent::DagProgress(p) => self.dag_progress = Some(p.progress),
            BuildEvent::CostTicker(p) => self.live_cost = Some(p.cost.clone()),
            BuildEvent::CostWarning(p) => {
                self.cost_warning = Some(p.message.clone());
                self.push_activity(LogLevel::Warn, LogCategory::Activity, &p.message, now_ms);
            }
            BuildEvent::CostExceeded(p) => {
                self.cost_exceeded = Some(p.message.clone());
                self.push_activity(LogLevel::Error, LogCategory::Activity, &p.message, now_ms);
            }
            BuildEvent::TokenUpdate(p) => self.totals.replace(p.input_tokens, p.output_tokens),
            BuildEvent::ContextReset(_) => self.context_window_tokens = 0,
            BuildEvent::Unknown => {}
        }
    }

    /// Submit an interjection into the pending ledger.
    pub fn submit_interjection(&mut self, message: impl Into<String>, clock: &impl Clock) {
        self.interjections.submit(message, clock.epoch_ms());
    }

    /// Drop delivered interjection chips past their display window.
    pub fn prune_interjections(&mut self, clock: &impl Clock) {
        self.interjections.prune(clock.epoch_ms());
    }

    // -- lifecycle --

    fn on_build_started(&mut self, p: &BuildStartedPayload, now_ms: u64) {
        self.no_build = false;
        self.build = Some(p.build.clone());

        self.phase_states = vec![PhaseState::default(); self.phases.len()];
        if let Some(first) = self.phase_states.first_mut() {
            first.status = PhaseStatus::Active;
        }

        self.reset_phase_scope();
        self.invariants.clear();
        self.tasks.clear();
        self.dag_progress = None;
        self.pause = None;
        self.totals = TokenTotals::default();
        self.context_window_tokens = 0;
        self.live_cost = None;
        // Cost banners survive every event except a fresh build start.
        self.cost_warning = None;
        self.cost_exceeded = None;

        let msg = format!("Build {} started", p.build.id);
        self.push_activity(LogLevel::System, LogCategory::Activity, &msg, now_ms);
    }

    fn on_build_log(&mut self, p: &BuildLogPayload, now_ms: u64) {
        let category = classify_source(p.source.as_deref());
        self.push_activity(p.level, category, &p.message, now_ms);
    }

    fn on_phase_complete(&mut self, p: &PhaseCompletePayload, now_ms: u64) {
        let msg = format!(
            "{} complete ({} in / {} out tokens)",
            p.phase, p.input_tokens, p.output_tokens
        );
        self.push_activity(LogLevel::System, LogCategory::Activity, &msg, now_ms);

        // Additive by policy: a redelivered phase_complete double-counts.
        self.totals.add(p.input_tokens, p.output_tokens);

        if let Some(number) = parse_phase_number(&p.phase) {
            if let Some(state) = self.phase_states.get_mut(number) {
                state.status = PhaseStatus::Pass;
                state.input_tokens = p.input_tokens;
                state.output_tokens = p.output_tokens;
                state.elapsed_ms = p.elapsed_ms;
            }
            let next = number + 1;
            if let Some(state) = self.phase_states.get_mut(next) {
                // Promote only from Pending; redelivery must not restamp a
                // phase that already advanced.
                if state.status == PhaseStatus::Pending {
                    state.status = PhaseStatus::Active;
                }
            }
            if let Some(build) = &mut self.build {
                build.phase = format!("Phase {next}");
            }
        }

        self.reset_phase_scope();
    }

    fn on_build_complete(&mut self, p: &BuildCompletePayload, now_ms: u64) {
        if let Some(build) = &mut self.build {
            build.status = BuildStatus::Completed;
            if p.completed_at_ms.is_some() {
                build.completed_at_ms = p.completed_at_ms;
            }
        }
        // Absolute totals overwrite the running counters when present.
        if p.total_input_tokens.is_some() || p.total_output_tokens.is_some() {
            self.totals.replace(
                p.total_input_tokens.unwrap_or(self.totals.input),
                p.total_output_tokens.unwrap_or(self.totals.output),
            );
        }
        for state in &mut self.phase_states {
            if state.status != PhaseStatus::Fail {
                state.status = PhaseStatus::Pass;
            }
        }
        self.push_activity(LogLevel::System, LogCategory::Activity, "Build complete", now_ms);
    }

    fn on_build_error(&mut self, p: &BuildErrorPayload, now_ms: u64) {
        if let Some(build) = &mut self.build {
            build.status = BuildStatus::Failed;
            build.error_detail = Some(p.error_detail.clone());
        }
        for state in &mut self.phase_states {
            if state.status == PhaseStatus::Active {
                state.status = PhaseStatus::Fail;
            }
        }
        let msg = format!("Build failed: {}", p.error_detail);
        self.push_activity(LogLevel::Error, LogCategory::Activity, &msg, now_ms);
    }

    fn on_build_cancelled(&mut self, now_ms: u64) {
        if let Some(build) = &mut self.build {
            build.status = BuildStatus::Cancelled;
        }
        self.push_activity(LogLevel::System, LogCategory::Activity, "Build cancelled", now_ms);
    }

    fn on_build_paused(&mut self, p: &BuildPausedPayload, now_ms: u64) {
        if let Some(build) = &mut self.build {
            build.status = BuildStatus::Paused;
        }
        let actions = if p.actions.is_empty() {
            ResumeAction::ALL.to_vec()
        } else {
            p.actions.clone()
        };
        self.pause = Some(PauseInfo {
            phase: p.phase.clone(),
            consecutive_failures: p.consecutive_failures,
            findings: p.findings.clone(),
            actions,
        });
        if let Some(state) = self.phase_state_for_label(&p.phase) {
            state.status = PhaseStatus::Paused;
        }
        let msg = format!("Build paused at {}", p.phase);
        self.push_activity(LogLevel::Warn, LogCategory::Activity, &msg, now_ms);
    }

    fn on_build_resumed(&mut self, p: &BuildResumedPayload, now_ms: u64) {
        self.pause = None;
        if let Some(build) = &mut self.build {
            build.status = BuildStatus::Running;
        }
        if let Some(state) = self.phase_state_for_label(&p.phase) {
            // Only a paused phase goes back to active; a resume addressed
            // at an already-advanced phase leaves it alone.
            if state.status == PhaseStatus::Paused {
                state.status = PhaseStatus::Active;
            }
        }
        let msg = format!("Build resumed at {}", p.phase);
        self.push_activity(LogLevel::System, LogCategory::Activity, &msg, now_ms);
    }

    fn on_build_interjection(&mut self, p: &BuildInterjectionPayload, now_ms: u64) {
        self.interjections.observe_delivery(now_ms);
        let msg = format!("Interjection delivered: {}", p.message);
        self.push_activity(LogLevel::System, LogCategory::Activity, &msg, now_ms);
    }

    // -- plan-execute files --

    fn on_file_manifest(&mut self, p: &FileManifestPayload) {
        self.manifest = p
            .files
            .iter()
            .map(|f| ManifestFile {
                path: f.path.clone(),
                purpose: f.purpose.clone(),
                language: f.language.clone(),
                estimated_lines: f.estimated_lines,
                ..ManifestFile::default()
            })
            .collect();
    }

    fn on_file_generating(&mut self, p: &FileGeneratingPayload) {
        let file = self.manifest_entry_mut(&p.path);
        file.status = FileStatus::Generating;
    }

    fn on_file_generated(&mut self, p: &FileGeneratedPayload) {
        // Additive by policy, same as phase_complete.
        self.totals.add(p.input_tokens, p.output_tokens);
        // Plan-execute files are generated in independent calls; the gauge
        // tracks the largest single call, not a running sum.
        let call = p.input_tokens.saturating_add(p.output_tokens);
        self.context_window_tokens = self.context_window_tokens.max(call);

        let file = self.manifest_entry_mut(&p.path);
        file.status = FileStatus::Done;
        file.actual_lines = p.actual_lines;
        file.input_tokens = p.input_tokens;
        file.output_tokens = p.output_tokens;
    }

    fn on_file_audited(&mut self, p: &FileAuditedPayload) {
        if let Some(file) = self.manifest.iter_mut().find(|f| f.path == p.path) {
            file.audit_status = if p.passed { AuditStatus::Pass } else { AuditStatus::Fail };
            file.audit_findings = p.findings.clone();
        }
    }

    fn set_audit_status(&mut self, path: &str, status: AuditStatus) {
        if let Some(file) = self.manifest.iter_mut().find(|f| f.path == path) {
            file.audit_status = status;
        }
    }

    /// Upsert a manifest row by path. Creates a placeholder when a file
    /// event arrives before the authoritative manifest announcement.
    fn manifest_entry_mut(&mut self, path: &str) -> &mut ManifestFile {
        if let Some(index) = self.manifest.iter().position(|f| f.path == path) {
            return &mut self.manifest[index];
        }
        self.manifest.push(ManifestFile::placeholder(path));
        let last = self.manifest.len() - 1;
        &mut self.manifest[last]
    }

    // -- governance / DAG --

    fn set_governance(&mut self, p: &GovernancePayload, passed: bool) {
        self.governance = Some(GovernanceResult {
            rule: p.rule.clone(),
            passed,
            detail: p.detail.clone(),
        });
    }

    fn on_dag_initialized(&mut self, p: &DagInitializedPayload) {
        self.tasks = p
            .tasks
            .iter()
            .map(|t| DagTask {
                id: t.id.clone(),
                name: t.name.clone(),
                depends_on: t.depends_on.clone(),
                status: TaskStatus::Pending,
                error: None,
            })
            .collect();
    }

    fn set_task_status(&mut self, p: &TaskPayload, status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == p.task_id) {
            task.status = status;
            if status == TaskStatus::Failed {
                task.error = p.error.clone();
            }
        }
    }

    // -- helpers --

    /// Clear the projections scoped to the current phase.
    fn reset_phase_scope(&mut self) {
        self.manifest.clear();
        self.audit = None;
        self.verification = None;
        self.governance = None;
    }

    fn phase_state_for_label(&mut self, label: &str) -> Option<&mut PhaseState> {
        let number = parse_phase_number(label)?;
        self.phase_states.get_mut(number)
    }

    fn push_activity(
        &mut self,
        level: LogLevel,
        category: LogCategory,
        message: &str,
        now_ms: u64,
    ) {
        self.activity.push(ActivityEntry {
            at_ms: now_ms,
            message: message.to_string(),
            level,
            category,
        });
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
