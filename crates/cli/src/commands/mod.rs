// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! CLI command implementations

use fg_client::ApiClient;
use fg_core::ProjectId;

pub mod build;
pub mod files;
pub mod instructions;
pub mod say;
pub mod status;
pub mod watch;

/// Shared command context: the API client plus the addressed project.
pub struct Ctx {
    pub api: ApiClient,
    pub ws_url: String,
    pub token: String,
    pub project: ProjectId,
}
