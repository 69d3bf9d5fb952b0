// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Stream hygiene: project filtering, wire-shape folding, manifest upserts.

use crate::prelude::*;
use fg_core::event::BuildEvent;
use fg_core::{FileStatus, SlashCommand};

#[test]
fn events_for_other_projects_change_nothing() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);
    let before = view.clone();

    view.apply(&event::phase_complete("p-2", "Phase 0", 120, 40), &clock);
    view.apply(&event::build_error("p-2", "boom"), &clock);
    view.apply(&event::cost_exceeded("p-2", "cap"), &clock);

    assert_eq!(view, before);
}

// The exact shape the backend puts on the wire, folded without constructors.
#[test]
fn wire_frames_fold_into_the_view() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);

    let frames = [
        r#"{"type":"phase_complete","payload":{"project_id":"p-1","phase":"Phase 0","input_tokens":120,"output_tokens":40,"elapsed_ms":900}}"#,
        r#"{"type":"file_generating","payload":{"project_id":"p-1","path":"src/a.ts"}}"#,
        r#"{"type":"file_generated","payload":{"project_id":"p-1","path":"src/a.ts","actual_lines":80,"input_tokens":500,"output_tokens":200}}"#,
        r#"{"type":"some_future_event","payload":{"project_id":"p-1"}}"#,
    ];
    for frame in frames {
        let event: BuildEvent = serde_json::from_str(frame).unwrap();
        view.apply(&event, &clock);
    }

    assert_eq!(view.phase_states[0].status, PhaseStatus::Pass);
    assert_eq!(view.manifest.len(), 1);
    assert_eq!(view.manifest[0].status, FileStatus::Done);
    assert_eq!((view.totals.input, view.totals.output), (620, 240));
}

#[test]
fn generating_then_generated_upserts_one_row() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);

    view.apply(&event::file_generating("p-1", "a.ts"), &clock);
    view.apply(&event::file_generated("p-1", "a.ts", 100, 50), &clock);

    let rows: Vec<_> = view.manifest.iter().filter(|f| f.path == "a.ts").collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, FileStatus::Done);
}

#[test]
fn interjection_ledger_marks_oldest_pending_delivered() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);
    view.submit_interjection("first", &clock);
    view.submit_interjection("second", &clock);

    let frame = r#"{"type":"build_interjection","payload":{"project_id":"p-1","message":"first"}}"#;
    let event: BuildEvent = serde_json::from_str(frame).unwrap();
    view.apply(&event, &clock);

    let entries = view.interjections.entries();
    assert_eq!(entries[0].state, fg_core::InterjectionState::Delivered);
    assert_eq!(entries[1].state, fg_core::InterjectionState::Pending);
}

#[test]
fn slash_commands_share_the_interject_path() {
    assert_eq!(SlashCommand::parse("/pause"), Some(SlashCommand::Pause));
    assert_eq!(SlashCommand::parse("/start phase 3"), Some(SlashCommand::Start { phase: Some(3) }));
    assert_eq!(SlashCommand::parse("just a note"), None);
    assert_eq!(SlashCommand::parse("/unknowncmd"), None);
}
