// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use clap::ValueEnum;
use fg_core::{
    format_elapsed_ms, ActivityEntry, BuildStatus, BuildView, LogLevel, PhaseStatus,
};

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One-character chip per phase: `✓` pass, `✗` fail, `●` active, `‖` paused,
/// `·` pending. Rendered in catalogue order.
pub fn phase_chips(view: &BuildView) -> String {
    view.phase_states
        .iter()
        .map(|state| match state.status {
            PhaseStatus::Pass => "✓",
            PhaseStatus::Fail => "✗",
            PhaseStatus::Active => "●",
            PhaseStatus::Paused => "‖",
            PhaseStatus::Pending => "·",
        })
        .collect()
}

/// Single status line for a view, e.g. `Phase 3 — running — 4m 10s`.
pub fn status_line(view: &BuildView, now_ms: u64) -> String {
    if view.no_build {
        return "No build yet".to_string();
    }
    let Some(build) = &view.build else {
        return "Loading...".to_string();
    };

    let mut line = format!("{} — {}", build.phase, build.status);
    if let Some(started) = build.started_at_ms {
        let end = build.completed_at_ms.unwrap_or(now_ms);
        line.push_str(&format!(" — {}", format_elapsed_ms(end.saturating_sub(started))));
    }
    if let Some(cost) = &view.live_cost {
        line.push_str(&format!(" — ${:.2}", cost.usd));
    }
    line
}

/// Render one activity entry as a timestamped line.
pub fn activity_line(entry: &ActivityEntry) -> String {
    let message = match entry.level {
        LogLevel::Error => color::fail(&entry.message),
        LogLevel::Warn => color::warn(&entry.message),
        LogLevel::System => color::muted(&entry.message),
        LogLevel::Info => entry.message.clone(),
    };
    format!("{} {}", color::muted(&format_clock(entry.at_ms)), message)
}

/// Status word with the matching palette color.
pub fn status_word(status: BuildStatus) -> String {
    let word = status.to_string();
    match status {
        BuildStatus::Completed => color::pass(&word),
        BuildStatus::Failed => color::fail(&word),
        BuildStatus::Paused | BuildStatus::Cancelled => color::warn(&word),
        BuildStatus::Pending | BuildStatus::Running => word,
    }
}

/// Format a timestamp as relative time against `now_ms` (e.g. "5s ago").
pub fn format_time_ago(epoch_ms: u64, now_ms: u64) -> String {
    if epoch_ms == 0 {
        return "-".to_string();
    }
    format!("{} ago", format_elapsed_ms(now_ms.saturating_sub(epoch_ms)))
}

/// HH:MM:SS wall-clock rendering of an epoch-ms timestamp (UTC).
fn format_clock(epoch_ms: u64) -> String {
    let secs_of_day = (epoch_ms / 1000) % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        secs_of_day / 3600,
        (secs_of_day % 3600) / 60,
        secs_of_day % 60
    )
}

/// Print the full status block for a view.
pub fn print_status(view: &BuildView, now_ms: u64) {
    println!("{}", status_line(view, now_ms));
    if view.phase_states.is_empty() {
        return;
    }
    println!("{}  {}", phase_chips(view), color::muted(&token_summary(view)));

    for (phase, state) in view.phases.iter().zip(&view.phase_states) {
        let marker = match state.status {
            PhaseStatus::Pass => color::pass("pass"),
            PhaseStatus::Fail => color::fail("fail"),
            PhaseStatus::Active => color::header("active"),
            PhaseStatus::Paused => color::warn("paused"),
            PhaseStatus::Pending => color::muted("pending"),
        };
        println!("  {:>2}. {:<28} {}", phase.number, phase.name, marker);
    }

    if let Some(pause) = &view.pause {
        println!(
            "{}",
            color::warn(&format!(
                "Paused at {} after {} consecutive failures",
                pause.phase, pause.consecutive_failures
            ))
        );
    }
    if let Some(banner) = &view.cost_exceeded {
        println!("{}", color::fail(banner));
    } else if let Some(banner) = &view.cost_warning {
        println!("{}", color::warn(banner));
    }
}

fn token_summary(view: &BuildView) -> String {
    format!(
        "{} in / {} out tokens, context {}",
        view.totals.input, view.totals.output, view.context_window_tokens
    )
}
