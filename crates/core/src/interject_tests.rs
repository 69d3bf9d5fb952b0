// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;

#[yare::parameterized(
    stop      = { "/stop", Some(SlashCommand::Stop) },
    status    = { "/status", Some(SlashCommand::Status) },
    pause     = { "/pause", Some(SlashCommand::Pause) },
    push      = { "/push", Some(SlashCommand::Push) },
    compact   = { "/compact", Some(SlashCommand::Compact) },
    commit    = { "/commit", Some(SlashCommand::Commit) },
    clear     = { "/clear", Some(SlashCommand::Clear) },
    verify    = { "/verify", Some(SlashCommand::Verify) },
    pull      = { "/pull", Some(SlashCommand::Pull) },
    fix       = { "/fix", Some(SlashCommand::Fix) },
    cont      = { "/continue", Some(SlashCommand::Continue) },
    free_text = { "please hold on", None },
    unknown   = { "/teleport", None },
    padded    = { "  /stop  ", Some(SlashCommand::Stop) },
)]
fn recognizes_vocabulary(input: &str, expected: Option<SlashCommand>) {
    assert_eq!(SlashCommand::parse(input), expected);
}

#[test]
fn start_with_phase_argument() {
    assert_eq!(
        SlashCommand::parse("/start phase 3"),
        Some(SlashCommand::Start { phase: Some(3) })
    );
    assert_eq!(
        SlashCommand::parse("/start 5"),
        Some(SlashCommand::Start { phase: Some(5) })
    );
    assert_eq!(
        SlashCommand::parse("/start"),
        Some(SlashCommand::Start { phase: None })
    );
}

#[test]
fn toast_for_known_statuses() {
    let cmd = SlashCommand::parse("/pause");
    assert_eq!(
        toast_line(cmd.as_ref(), "accepted", None),
        "Build will pause at the next safe point"
    );
    assert_eq!(
        toast_line(None, "accepted", None),
        "Interjection delivered to the builder"
    );
    assert_eq!(
        toast_line(None, "queued", None),
        "Interjection queued for the builder's next turn"
    );
    assert_eq!(
        toast_line(None, "error", Some("build is terminal")),
        "build is terminal"
    );
}

#[test]
fn toast_falls_back_to_raw_status() {
    assert_eq!(
        toast_line(None, "deferred", None),
        "Interjection status: deferred"
    );
    assert_eq!(toast_line(None, "deferred", Some("later")), "later");
}

#[test]
fn ledger_fifo_delivery() {
    let mut ledger = InterjectionLedger::default();
    ledger.submit("first", 100);
    ledger.submit("second", 200);

    ledger.observe_delivery(300);

    let entries = ledger.entries();
    assert_eq!(entries[0].state, InterjectionState::Delivered);
    assert_eq!(entries[0].delivered_at_ms, Some(300));
    assert_eq!(entries[1].state, InterjectionState::Pending);
}

#[test]
fn ledger_delivery_without_pending_is_noop() {
    let mut ledger = InterjectionLedger::default();
    ledger.observe_delivery(100);
    assert!(ledger.is_empty());
}

#[test]
fn ledger_prunes_delivered_after_ttl() {
    let mut ledger = InterjectionLedger::default();
    ledger.submit("first", 0);
    ledger.observe_delivery(1_000);

    ledger.prune(1_000 + DELIVERED_TTL_MS - 1);
    assert_eq!(ledger.entries().len(), 1);

    ledger.prune(1_000 + DELIVERED_TTL_MS);
    assert!(ledger.is_empty());
}

#[test]
fn ledger_never_prunes_pending() {
    let mut ledger = InterjectionLedger::default();
    ledger.submit("waiting", 0);
    ledger.prune(u64::MAX);
    assert_eq!(ledger.entries().len(), 1);
}
