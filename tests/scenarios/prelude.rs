// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Shared imports for reducer scenarios.

pub use fg_core::test_support::{catalogue, event, started_view};
pub use fg_core::{BuildStatus, BuildView, FakeClock, PhaseStatus};
