// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Token and cost counters.
//!
//! Cumulative totals and the context-window gauge have independent update
//! and reset policies: totals ADD on per-phase and per-file events and are
//! REPLACED by absolute-snapshot events; the gauge tracks the peak single
//! call and is zeroed only by `context_reset`.

use serde::{Deserialize, Serialize};

/// Cumulative input/output token totals for the viewed build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTotals {
    pub input: u64,
    pub output: u64,
}

impl TokenTotals {
    /// Additive update, used by per-phase and per-file delta events.
    pub fn add(&mut self, input: u64, output: u64) {
        self.input = self.input.saturating_add(input);
        self.output = self.output.saturating_add(output);
    }

    /// Absolute overwrite, used by snapshot-carrying events.
    pub fn replace(&mut self, input: u64, output: u64) {
        self.input = input;
        self.output = output;
    }
}

/// Live cost snapshot, replaced wholesale by each `cost_ticker` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveCost {
    #[serde(default)]
    pub usd: f64,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
