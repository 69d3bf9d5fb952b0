// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Phase catalogue entries and per-build derived phase state.

use serde::{Deserialize, Serialize};

/// One step of the server-defined ordered phase sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub number: usize,
    pub name: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

/// Derived status of one phase within the viewed build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    #[default]
    Pending,
    Active,
    Pass,
    Fail,
    Paused,
}

crate::simple_display! {
    PhaseStatus {
        Pending => "pending",
        Active => "active",
        Pass => "pass",
        Fail => "fail",
        Paused => "paused",
    }
}

/// Per-build derived state for one phase.
///
/// Token counts and elapsed time are stamped when the phase completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseState {
    pub status: PhaseStatus,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub elapsed_ms: u64,
}

/// Parse the phase number out of a free-text phase label.
///
/// Labels are typically "Phase N" but the server does not guarantee it;
/// the first integer in the label wins, so "Phase 3 (retry 2)" resolves
/// to 3.
pub fn parse_phase_number(label: &str) -> Option<usize> {
    label
        .split(|c: char| !c.is_ascii_digit())
        .find(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
