// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Live activity feed entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
    System,
}

crate::simple_display! {
    LogLevel {
        Info => "info",
        Warn => "warn",
        Error => "error",
        System => "system",
    }
}

/// Feed lane an entry renders in: orchestration chatter vs. generated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    #[default]
    Activity,
    Output,
}

crate::simple_display! {
    LogCategory {
        Activity => "activity",
        Output => "output",
    }
}

/// Classify a historical log line by its source tag.
///
/// Lines emitted by the file writer or the builder itself are generated
/// output; everything else is orchestration activity.
pub fn classify_source(source: Option<&str>) -> LogCategory {
    match source {
        Some("file") | Some("builder") => LogCategory::Output,
        _ => LogCategory::Activity,
    }
}

/// One line in the live log feed. Append-only; ordering is arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Wall-clock receipt time (client side), epoch milliseconds.
    pub at_ms: u64,
    pub message: String,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub category: LogCategory,
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
