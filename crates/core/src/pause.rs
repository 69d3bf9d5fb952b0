// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Pause state and the fixed resume-action vocabulary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Action a user may take to resume a paused build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeAction {
    Retry,
    Skip,
    Edit,
    Abort,
}

crate::simple_display! {
    ResumeAction {
        Retry => "retry",
        Skip => "skip",
        Edit => "edit",
        Abort => "abort",
    }
}

impl ResumeAction {
    /// The full vocabulary, in presentation order.
    pub const ALL: [ResumeAction; 4] = [
        ResumeAction::Retry,
        ResumeAction::Skip,
        ResumeAction::Edit,
        ResumeAction::Abort,
    ];
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown resume action '{0}' (expected retry, skip, edit, or abort)")]
pub struct UnknownResumeAction(pub String);

impl std::str::FromStr for ResumeAction {
    type Err = UnknownResumeAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retry" => Ok(ResumeAction::Retry),
            "skip" => Ok(ResumeAction::Skip),
            "edit" => Ok(ResumeAction::Edit),
            "abort" => Ok(ResumeAction::Abort),
            other => Err(UnknownResumeAction(other.to_string())),
        }
    }
}

fn default_actions() -> Vec<ResumeAction> {
    ResumeAction::ALL.to_vec()
}

/// Ephemeral pause context, non-null only while the build is paused.
///
/// Cleared by any `build_resumed` event or by local dismissal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseInfo {
    pub phase: String,
    #[serde(default)]
    pub consecutive_failures: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<String>,
    #[serde(default = "default_actions")]
    pub actions: Vec<ResumeAction>,
}

#[cfg(test)]
#[path = "pause_tests.rs"]
mod tests;
