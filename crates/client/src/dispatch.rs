// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Command dispatcher — the write half of the console.
//!
//! Each method maps one user intent onto its REST endpoint and shapes the
//! response for display. State changes themselves arrive over the event
//! stream; the dispatcher only returns what to show immediately.

use crate::api::{ApiClient, StartOptions};
use crate::error::ApiError;
use fg_core::{Build, ProjectId, ResumeAction, SlashCommand};

/// What to surface after an interjection round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterjectOutcome {
    /// The toast line to show.
    pub toast: String,
    /// Server status tag, for callers that branch on it.
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    api: ApiClient,
}

impl CommandDispatcher {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn start(
        &self,
        project: &ProjectId,
        options: &StartOptions,
    ) -> Result<Build, ApiError> {
        let build = self.api.start_build(project, options).await?;
        tracing::info!(%project, build = %build.id, "build started");
        Ok(build)
    }

    pub async fn cancel(&self, project: &ProjectId) -> Result<Build, ApiError> {
        self.api.cancel(project).await
    }

    pub async fn force_cancel(&self, project: &ProjectId) -> Result<Build, ApiError> {
        self.api.force_cancel(project).await
    }

    pub async fn circuit_break(&self, project: &ProjectId) -> Result<Build, ApiError> {
        self.api.circuit_break(project).await
    }

    pub async fn resume(
        &self,
        project: &ProjectId,
        action: ResumeAction,
    ) -> Result<(), ApiError> {
        tracing::info!(%project, %action, "resuming paused build");
        self.api.resume(project, action).await
    }

    /// Send an interjection and pick the toast for its response.
    ///
    /// Slash commands and free text travel identically; recognition only
    /// tailors the toast for `accepted` responses.
    pub async fn interject(
        &self,
        project: &ProjectId,
        message: &str,
    ) -> Result<InterjectOutcome, ApiError> {
        let command = SlashCommand::parse(message);
        let ack = self.api.interject(project, message).await?;
        let toast =
            fg_core::toast_line(command.as_ref(), &ack.status, ack.message.as_deref());
        Ok(InterjectOutcome { toast, status: ack.status })
    }
}
