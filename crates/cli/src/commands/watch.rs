// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! `fg watch` - follow a build live
//!
//! Seeds a view from a snapshot, then folds the event stream into it,
//! printing activity lines and status transitions as they land. A lagged
//! subscription reseeds from a fresh snapshot instead of trusting the
//! folded state.

use anyhow::Result;
use fg_client::{ChannelItem, EventChannel, Seed, SnapshotLoader};
use fg_core::{BuildStatus, BuildView, Clock, SystemClock};
use tokio_util::sync::CancellationToken;

use crate::color;
use crate::commands::Ctx;
use crate::output;

pub async fn handle(ctx: &Ctx) -> Result<()> {
    let clock = SystemClock;
    let loader = SnapshotLoader::new(ctx.api.clone());
    let channel = EventChannel::connect(ctx.ws_url.clone(), ctx.token.clone());
    // Subscribe before the snapshot fetch so no event falls in the gap.
    let mut events = channel.subscribe(ctx.project.clone());

    let mut view = seed(&loader, ctx).await?;
    output::print_status(&view, clock.epoch_ms());

    loop {
        let item = tokio::select! {
            item = events.next() => item,
            _ = tokio::signal::ctrl_c() => {
                channel.shutdown();
                return Ok(());
            }
        };

        match item {
            ChannelItem::Event(event) => {
                let before = WatchMark::of(&view);
                view.apply(&event, &clock);
                report(&view, &before, clock.epoch_ms());
                if view.build.as_ref().is_some_and(|b| b.status.is_terminal()) {
                    channel.shutdown();
                    return Ok(());
                }
            }
            ChannelItem::Lagged { skipped } => {
                tracing::warn!(skipped, "stream lagged; reloading snapshot");
                view = seed(&loader, ctx).await?;
                println!("{}", color::muted("(stream lagged; state reloaded)"));
                output::print_status(&view, clock.epoch_ms());
            }
            ChannelItem::Closed => {
                println!("{}", color::muted("(event stream closed)"));
                return Ok(());
            }
        }
    }
}

async fn seed(loader: &SnapshotLoader, ctx: &Ctx) -> Result<BuildView> {
    let cancel = CancellationToken::new();
    Ok(match loader.load(&ctx.project, &cancel).await? {
        Seed::NoBuild => BuildView::no_build(ctx.project.clone()),
        Seed::Loaded(snapshot) => snapshot.into_view(ctx.project.clone()),
    })
}

/// What was on screen before an event, to diff against after folding.
struct WatchMark {
    activity_len: usize,
    status: Option<BuildStatus>,
    chips: String,
    paused: bool,
}

impl WatchMark {
    fn of(view: &BuildView) -> Self {
        Self {
            activity_len: view.activity.len(),
            status: view.build.as_ref().map(|b| b.status),
            chips: output::phase_chips(view),
            paused: view.pause.is_some(),
        }
    }
}

fn report(view: &BuildView, before: &WatchMark, now_ms: u64) {
    for entry in view.activity.iter().skip(before.activity_len) {
        println!("{}", output::activity_line(entry));
    }

    let status = view.build.as_ref().map(|b| b.status);
    let chips = output::phase_chips(view);
    if status != before.status || chips != before.chips {
        println!("{}  {}", chips, output::status_line(view, now_ms));
    }

    if !before.paused {
        if let Some(pause) = &view.pause {
            println!(
                "{}",
                color::warn(&format!(
                    "Paused at {} ({} consecutive failures); resume with: fg resume <retry|skip|edit|abort>",
                    pause.phase, pause.consecutive_failures
                ))
            );
        }
    }
}
