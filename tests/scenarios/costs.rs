// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Cost tracking walks: live ticker, sticky banners, context gauge.

use crate::prelude::*;
use fg_core::event::{BuildEvent, ContextResetPayload, CostTickerPayload, TokenUpdatePayload};
use fg_core::LiveCost;

#[test]
fn ticker_replaces_live_cost() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);

    for usd in [0.5, 1.25] {
        view.apply(
            &BuildEvent::CostTicker(CostTickerPayload {
                project_id: "p-1".into(),
                cost: LiveCost { usd, input_tokens: 100, output_tokens: 40 },
            }),
            &clock,
        );
    }

    let cost = view.live_cost.as_ref().unwrap();
    assert!((cost.usd - 1.25).abs() < f64::EPSILON);
}

#[test]
fn cost_banners_survive_unrelated_events() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);

    view.apply(&event::cost_warning("p-1", "approaching cap"), &clock);
    view.apply(&event::cost_exceeded("p-1", "cap reached"), &clock);
    view.apply(&event::build_log("p-1", "still working", None), &clock);
    view.apply(&event::phase_complete("p-1", "Phase 0", 10, 5), &clock);

    assert_eq!(view.cost_warning.as_deref(), Some("approaching cap"));
    assert_eq!(view.cost_exceeded.as_deref(), Some("cap reached"));
}

#[test]
fn token_update_is_absolute() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);
    view.apply(&event::phase_complete("p-1", "Phase 0", 100, 50), &clock);

    view.apply(
        &BuildEvent::TokenUpdate(TokenUpdatePayload {
            project_id: "p-1".into(),
            input_tokens: 5_000,
            output_tokens: 2_000,
        }),
        &clock,
    );

    assert_eq!((view.totals.input, view.totals.output), (5_000, 2_000));
}

#[test]
fn context_gauge_is_independent_of_totals() {
    let clock = FakeClock::new();
    let mut view = started_view(&clock);
    view.apply(&event::file_generated("p-1", "a.ts", 900, 300), &clock);
    view.apply(&event::file_generated("p-1", "b.ts", 400, 100), &clock);
    assert_eq!(view.context_window_tokens, 1_200);

    view.apply(
        &BuildEvent::ContextReset(ContextResetPayload { project_id: "p-1".into() }),
        &clock,
    );

    assert_eq!(view.context_window_tokens, 0);
    assert_eq!((view.totals.input, view.totals.output), (1_300, 400));
}
