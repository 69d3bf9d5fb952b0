// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;

#[test]
fn add_accumulates() {
    let mut totals = TokenTotals::default();
    totals.add(100, 50);
    totals.add(200, 75);
    assert_eq!(totals, TokenTotals { input: 300, output: 125 });
}

#[test]
fn replace_overwrites() {
    let mut totals = TokenTotals { input: 300, output: 125 };
    totals.replace(500, 300);
    assert_eq!(totals, TokenTotals { input: 500, output: 300 });
}

#[test]
fn add_saturates_at_max() {
    let mut totals = TokenTotals { input: u64::MAX - 1, output: 0 };
    totals.add(10, 10);
    assert_eq!(totals.input, u64::MAX);
    assert_eq!(totals.output, 10);
}

#[test]
fn live_cost_deserializes_sparse() {
    let cost: LiveCost = serde_json::from_str(r#"{"usd":1.25}"#).unwrap();
    assert!((cost.usd - 1.25).abs() < f64::EPSILON);
    assert_eq!(cost.input_tokens, 0);
}
