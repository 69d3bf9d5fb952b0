// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;
use crate::build::BuildStatus;

#[test]
fn frame_round_trip() {
    let event = BuildEvent::PhaseComplete(PhaseCompletePayload {
        project_id: "p-1".into(),
        phase: "Phase 2".into(),
        input_tokens: 120,
        output_tokens: 40,
        elapsed_ms: 9_000,
    });

    let json = serde_json::to_string(&event).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "phase_complete");
    assert_eq!(value["payload"]["project_id"], "p-1");

    let parsed: BuildEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, event);
}

#[test]
fn unknown_type_tag_deserializes_to_unknown() {
    let json = r#"{"type":"quantum_flux","payload":{"project_id":"p-1"}}"#;
    let parsed: BuildEvent = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, BuildEvent::Unknown);
    assert!(parsed.project_id().is_none());
}

#[test]
fn missing_payload_fields_default() {
    let json = r#"{"type":"phase_complete","payload":{"project_id":"p-1"}}"#;
    let parsed: BuildEvent = serde_json::from_str(json).unwrap();

    let BuildEvent::PhaseComplete(payload) = parsed else {
        panic!("expected phase_complete");
    };
    assert_eq!(payload.phase, "");
    assert_eq!(payload.input_tokens, 0);
    assert_eq!(payload.elapsed_ms, 0);
}

#[test]
fn build_started_carries_full_build() {
    let json = r#"{
        "type": "build_started",
        "payload": {
            "project_id": "p-1",
            "build": {"id": "b1", "project_id": "p-1", "phase": "Phase 0",
                      "status": "running", "loop_count": 0}
        }
    }"#;
    let parsed: BuildEvent = serde_json::from_str(json).unwrap();

    let BuildEvent::BuildStarted(payload) = parsed else {
        panic!("expected build_started");
    };
    assert_eq!(payload.build.status, BuildStatus::Running);
    assert_eq!(payload.project_id, "p-1");
}

#[test]
fn every_known_event_reports_its_project() {
    let json = r#"{"type":"cost_ticker","payload":{"project_id":"p-9","usd":0.5}}"#;
    let parsed: BuildEvent = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.project_id().map(|p| p.as_str()), Some("p-9"));

    let BuildEvent::CostTicker(payload) = parsed else {
        panic!("expected cost_ticker");
    };
    assert!((payload.cost.usd - 0.5).abs() < f64::EPSILON);
}

#[test]
fn dag_progress_flattens_counters() {
    let json = r#"{"type":"dag_progress","payload":{"project_id":"p-1","total":8,"completed":3,"running":2,"failed":1}}"#;
    let parsed: BuildEvent = serde_json::from_str(json).unwrap();

    let BuildEvent::DagProgress(payload) = parsed else {
        panic!("expected dag_progress");
    };
    assert_eq!(payload.progress.total, 8);
    assert_eq!(payload.progress.completed, 3);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_tokens() -> impl Strategy<Value = u64> {
        0u64..2_000_000
    }

    proptest! {
        #[test]
        fn phase_complete_serde_round_trip(
            input in arb_tokens(),
            output in arb_tokens(),
            elapsed in arb_tokens(),
            n in 0usize..64,
        ) {
            let event = BuildEvent::PhaseComplete(PhaseCompletePayload {
                project_id: "p-1".into(),
                phase: format!("Phase {n}"),
                input_tokens: input,
                output_tokens: output,
                elapsed_ms: elapsed,
            });
            let json = serde_json::to_string(&event).unwrap();
            let parsed: BuildEvent = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, event);
        }
    }
}
