// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Interjections: slash-command recognition, the pending/delivered ledger,
//! and toast selection for interject responses.
//!
//! Slash commands share the interject endpoint with free text; recognition
//! only changes the toast shown for known response statuses, never the
//! request shape.

use serde::{Deserialize, Serialize};

/// The fixed slash-command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlashCommand {
    Stop,
    Start { phase: Option<usize> },
    Status,
    Pause,
    Push,
    Compact,
    Commit,
    Clear,
    Verify,
    Pull,
    Fix,
    Continue,
}

impl SlashCommand {
    /// Recognize a slash command at the start of an interjection.
    ///
    /// Returns `None` for free text and for unknown `/...` words — those
    /// are still sent verbatim; they just get the generic toast.
    pub fn parse(input: &str) -> Option<SlashCommand> {
        let trimmed = input.trim();
        let rest = trimmed.strip_prefix('/')?;
        let mut words = rest.split_whitespace();
        let head = words.next()?;

        match head {
            "stop" => Some(SlashCommand::Stop),
            "start" => {
                let tail: Vec<&str> = words.collect();
                let phase = crate::phase::parse_phase_number(&tail.join(" "));
                Some(SlashCommand::Start { phase })
            }
            "status" => Some(SlashCommand::Status),
            "pause" => Some(SlashCommand::Pause),
            "push" => Some(SlashCommand::Push),
            "compact" => Some(SlashCommand::Compact),
            "commit" => Some(SlashCommand::Commit),
            "clear" => Some(SlashCommand::Clear),
            "verify" => Some(SlashCommand::Verify),
            "pull" => Some(SlashCommand::Pull),
            "fix" => Some(SlashCommand::Fix),
            "continue" => Some(SlashCommand::Continue),
            _ => None,
        }
    }
}

/// Select the toast line for an interject response.
///
/// `status` is the server's response status tag; only the fixed vocabulary
/// gets a tailored line, anything else falls back to the raw tag.
pub fn toast_line(command: Option<&SlashCommand>, status: &str, server_message: Option<&str>) -> String {
    match status {
        "accepted" => match command {
            Some(cmd) => accepted_toast(cmd),
            None => "Interjection delivered to the builder".to_string(),
        },
        "queued" => "Interjection queued for the builder's next turn".to_string(),
        "ignored" => "The builder is not accepting interjections right now".to_string(),
        "error" => server_message
            .unwrap_or("The builder rejected the interjection")
            .to_string(),
        other => match server_message {
            Some(msg) => msg.to_string(),
            None => format!("Interjection status: {other}"),
        },
    }
}

fn accepted_toast(command: &SlashCommand) -> String {
    match command {
        SlashCommand::Stop => "Stop requested; the builder will halt".to_string(),
        SlashCommand::Start { phase: Some(n) } => format!("Build will start from phase {n}"),
        SlashCommand::Start { phase: None } => "Build start requested".to_string(),
        SlashCommand::Status => "Status report requested".to_string(),
        SlashCommand::Pause => "Build will pause at the next safe point".to_string(),
        SlashCommand::Push => "Push requested".to_string(),
        SlashCommand::Compact => "Context compaction requested".to_string(),
        SlashCommand::Commit => "Commit requested".to_string(),
        SlashCommand::Clear => "Context clear requested".to_string(),
        SlashCommand::Verify => "Verification run requested".to_string(),
        SlashCommand::Pull => "Pull requested".to_string(),
        SlashCommand::Fix => "Fix pass requested".to_string(),
        SlashCommand::Continue => "Build will continue".to_string(),
    }
}

/// How long a delivered interjection chip stays visible before pruning.
pub const DELIVERED_TTL_MS: u64 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterjectionState {
    Pending,
    Delivered,
}

/// One submitted interjection awaiting confirmation from the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInterjection {
    pub message: String,
    pub state: InterjectionState,
    pub submitted_at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at_ms: Option<u64>,
}

/// FIFO ledger of submitted interjections.
///
/// A `build_interjection` event marks the oldest pending entry delivered.
/// Matching by order is heuristic — rapid concurrent submissions can be
/// misattributed; the payloads carry no correlation id to do better with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterjectionLedger {
    entries: Vec<PendingInterjection>,
}

impl InterjectionLedger {
    pub fn submit(&mut self, message: impl Into<String>, now_ms: u64) {
        self.entries.push(PendingInterjection {
            message: message.into(),
            state: InterjectionState::Pending,
            submitted_at_ms: now_ms,
            delivered_at_ms: None,
        });
    }

    /// Mark the oldest pending entry delivered. No-op when nothing is pending.
    pub fn observe_delivery(&mut self, now_ms: u64) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.state == InterjectionState::Pending)
        {
            entry.state = InterjectionState::Delivered;
            entry.delivered_at_ms = Some(now_ms);
        }
    }

    /// Drop delivered entries older than [`DELIVERED_TTL_MS`].
    pub fn prune(&mut self, now_ms: u64) {
        self.entries.retain(|e| match e.delivered_at_ms {
            Some(at) => now_ms.saturating_sub(at) < DELIVERED_TTL_MS,
            None => true,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PendingInterjection] {
        &self.entries
    }
}

#[cfg(test)]
#[path = "interject_tests.rs"]
mod tests;
