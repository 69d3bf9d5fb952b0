// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! REST snapshot shapes and the pure conversion into a seeded [`BuildView`].
//!
//! The loader fetches these concurrently at mount time; everything here is
//! deterministic so reconciliation against a snapshot taken at an arbitrary
//! prior point can be tested without a network.

use crate::activity::{classify_source, ActivityEntry, LogLevel};
use crate::build::{Build, BuildStatus};
use crate::id::ProjectId;
use crate::manifest::ManifestFile;
use crate::phase::{parse_phase_number, Phase, PhaseStatus};
use crate::tokens::LiveCost;
use crate::view::BuildView;
use serde::{Deserialize, Serialize};

/// One historical log line from `GET /build/logs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    #[serde(default)]
    pub at_ms: u64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Per-phase cost row from `GET /build/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseCost {
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub usd: f64,
}

/// Cost totals from `GET /build/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    #[serde(default)]
    pub total_usd: f64,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub phases: Vec<PhaseCost>,
}

/// Everything the loader managed to fetch for one project.
///
/// `summary` and `manifest` are best-effort seeds; their absence leaves the
/// corresponding view state at its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSnapshot {
    pub build: Build,
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub logs: Vec<LogLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<CostSummary>,
    #[serde(default)]
    pub manifest: Vec<ManifestFile>,
}

impl BuildSnapshot {
    /// Seed a view from this snapshot.
    pub fn into_view(self, project_id: ProjectId) -> BuildView {
        let mut view = BuildView::new(project_id, self.phases);

        for (number, state) in view.phase_states.iter_mut().enumerate() {
            state.status = derive_phase_status(&self.build, number);
        }

        view.activity = self
            .logs
            .into_iter()
            .map(|line| ActivityEntry {
                at_ms: line.at_ms,
                message: line.message,
                level: line.level,
                category: classify_source(line.source.as_deref()),
            })
            .collect();

        if let Some(summary) = self.summary {
            view.totals.replace(summary.input_tokens, summary.output_tokens);
            view.live_cost = Some(LiveCost {
                usd: summary.total_usd,
                input_tokens: summary.input_tokens,
                output_tokens: summary.output_tokens,
            });
        }

        view.manifest = self.manifest;
        view.build = Some(self.build);
        view
    }
}

/// Status of one phase as reconstructed from a snapshot taken mid-build.
///
/// Phases behind the current one have passed (a failed earlier phase would
/// have ended the build at that phase), the current phase mirrors the build
/// status, and later phases have not started.
fn derive_phase_status(build: &Build, number: usize) -> PhaseStatus {
    if build.status == BuildStatus::Completed {
        return PhaseStatus::Pass;
    }
    let current = parse_phase_number(&build.phase).unwrap_or(0);
    match number.cmp(&current) {
        std::cmp::Ordering::Less => PhaseStatus::Pass,
        std::cmp::Ordering::Greater => PhaseStatus::Pending,
        std::cmp::Ordering::Equal => match build.status {
            BuildStatus::Failed => PhaseStatus::Fail,
            BuildStatus::Paused => PhaseStatus::Paused,
            _ => PhaseStatus::Active,
        },
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
