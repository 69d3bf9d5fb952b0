// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Build lifecycle walks: start, phase advance, failure, pause/resume.

use crate::prelude::*;

#[test]
fn fresh_build_activates_the_first_phase() {
    let clock = FakeClock::new();
    let view = started_view(&clock);

    let build = view.build.as_ref().unwrap();
    assert_eq!(build.id, "b1");
    assert_eq!(build.status, BuildStatus::Running);
    assert_eq!(view.phase_states[0].status, PhaseStatus::Active);
    for state in &view.phase_states[1..] {
        assert_eq!(state.status, PhaseStatus::Pending);
    }
}

#[test]
fn completed_phase_passes_and_promotes_the_next() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);

    view.apply(&event::phase_complete("p-1", "Phase 0", 120, 40), &clock);

    assert_eq!(view.phase_states[0].status, PhaseStatus::Pass);
    assert_eq!(view.phase_states[1].status, PhaseStatus::Active);
    assert_eq!((view.totals.input, view.totals.output), (120, 40));
}

// Additive token policy: the stream carries no deduplication key, so a true
// redelivery double-counts tokens while the status transitions stay put.
#[test]
fn redelivered_phase_complete_recounts_tokens_only() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);
    let event = event::phase_complete("p-1", "Phase 0", 120, 40);

    view.apply(&event, &clock);
    let once = view.phase_states.clone();
    view.apply(&event, &clock);

    assert_eq!(view.phase_states[0].status, PhaseStatus::Pass);
    assert_eq!(view.phase_states[1].status, once[1].status);
    assert_eq!(view.phase_states[1].elapsed_ms, once[1].elapsed_ms);
    assert_eq!((view.totals.input, view.totals.output), (240, 80));
}

#[test]
fn build_error_fails_the_active_phase() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);
    view.apply(&event::phase_complete("p-1", "Phase 0", 120, 40), &clock);

    view.apply(&event::build_error("p-1", "syntax failure"), &clock);

    let build = view.build.as_ref().unwrap();
    assert_eq!(build.status, BuildStatus::Failed);
    assert_eq!(build.error_detail.as_deref(), Some("syntax failure"));
    assert_eq!(view.phase_states[1].status, PhaseStatus::Fail);
    // The already-passed phase keeps its verdict.
    assert_eq!(view.phase_states[0].status, PhaseStatus::Pass);
}

#[test]
fn pause_and_resume_round_trip() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);
    for n in 0..3 {
        view.apply(&event::phase_complete("p-1", &format!("Phase {n}"), 10, 5), &clock);
    }

    view.apply(&event::build_paused("p-1", "Phase 3", 2, Some("audit loop")), &clock);
    assert_eq!(view.build.as_ref().unwrap().status, BuildStatus::Paused);
    assert_eq!(view.phase_states[3].status, PhaseStatus::Paused);
    let pause = view.pause.as_ref().unwrap();
    assert_eq!(pause.consecutive_failures, 2);
    assert!(!pause.actions.is_empty());

    view.apply(&event::build_resumed("p-1", "Phase 3"), &clock);
    assert_eq!(view.build.as_ref().unwrap().status, BuildStatus::Running);
    assert_eq!(view.phase_states[3].status, PhaseStatus::Active);
    assert!(view.pause.is_none());
}

#[test]
fn completion_replaces_totals_with_absolutes() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);
    view.apply(&event::phase_complete("p-1", "Phase 0", 100, 50), &clock);
    view.apply(&event::phase_complete("p-1", "Phase 1", 200, 75), &clock);
    assert_eq!((view.totals.input, view.totals.output), (300, 125));

    view.apply(&event::build_complete_with_totals("p-1", 500, 300), &clock);

    assert_eq!(view.build.as_ref().unwrap().status, BuildStatus::Completed);
    assert_eq!((view.totals.input, view.totals.output), (500, 300));
    for state in &view.phase_states {
        assert_eq!(state.status, PhaseStatus::Pass);
    }
}

#[test]
fn a_new_start_resets_the_previous_session() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);
    view.apply(&event::phase_complete("p-1", "Phase 0", 120, 40), &clock);
    view.apply(&event::build_error("p-1", "boom"), &clock);
    view.apply(&event::cost_exceeded("p-1", "cap reached"), &clock);

    view.apply(&event::build_started("p-1", "b2"), &clock);

    assert_eq!(view.build.as_ref().unwrap().id, "b2");
    assert_eq!(view.totals, Default::default());
    assert!(view.cost_exceeded.is_none());
    assert_eq!(view.phase_states[0].status, PhaseStatus::Active);
    for state in &view.phase_states[1..] {
        assert_eq!(state.status, PhaseStatus::Pending);
    }
}
