// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fg-client: network layer for the ForgeGuard console.
//!
//! Three seams around the pure core: [`SnapshotLoader`] seeds a view over
//! REST, [`EventChannel`] streams live events over WebSocket, and
//! [`CommandDispatcher`] sends user commands. The reducer itself lives in
//! fg-core and never touches this crate.

pub mod api;
pub mod channel;
pub mod dispatch;
pub mod error;
pub mod snapshot;

pub use api::{ApiClient, ApiConfig, FileListing, InterjectAck, StartOptions};
pub use channel::{parse_frame, ChannelItem, EventChannel, ProjectEvents};
pub use dispatch::{CommandDispatcher, InterjectOutcome};
pub use error::{ApiError, LoadError};
pub use snapshot::{Seed, SnapshotLoader};
