// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fg-core: domain model and build-state reducer for the ForgeGuard console.
//!
//! Everything here is pure: the reducer folds stream events into a
//! [`BuildView`](view::BuildView), the snapshot module seeds one from REST
//! responses, and no module performs I/O.

pub mod macros;

pub mod activity;
pub mod build;
pub mod clock;
pub mod event;
pub mod id;
pub mod interject;
pub mod manifest;
pub mod pause;
pub mod phase;
pub mod results;
pub mod snapshot;
pub mod time_fmt;
pub mod tokens;
pub mod view;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use activity::{classify_source, ActivityEntry, LogCategory, LogLevel};
pub use build::{Build, BuildStatus};
#[cfg(any(test, feature = "test-support"))]
pub use build::BuildBuilder;
pub use clock::{Clock, FakeClock, SystemClock};
pub use event::BuildEvent;
pub use id::{BuildId, ProjectId, TaskId};
pub use interject::{
    toast_line, InterjectionLedger, InterjectionState, PendingInterjection, SlashCommand,
};
pub use manifest::{AuditStatus, FileStatus, ManifestFile};
pub use pause::{PauseInfo, ResumeAction, UnknownResumeAction};
pub use phase::{parse_phase_number, Phase, PhaseState, PhaseStatus};
pub use results::{
    AuditResult, DagProgress, DagTask, GovernanceResult, InvariantCheck, InvariantVerdict,
    TaskStatus, VerificationResult,
};
pub use snapshot::{BuildSnapshot, CostSummary, LogLine, PhaseCost};
pub use time_fmt::format_elapsed_ms;
pub use tokens::{LiveCost, TokenTotals};
pub use view::BuildView;
