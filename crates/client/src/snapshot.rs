// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Snapshot loader — fans out the REST requests that seed a view at mount
//! time or after a stream lag.
//!
//! Status and phases are critical path: without them there is no view to
//! seed. Logs, summary, and manifest are best-effort; a failure there is
//! logged and the view starts with that section empty.

use crate::api::ApiClient;
use crate::error::LoadError;
use fg_core::snapshot::BuildSnapshot;
use fg_core::ProjectId;
use tokio_util::sync::CancellationToken;

/// How many historical log lines to backfill on load.
pub const LOG_BACKFILL: usize = 200;

/// Outcome of a seeding pass.
#[derive(Debug)]
pub enum Seed {
    /// The project has never run a build.
    NoBuild,
    /// A build exists; the snapshot seeds the view.
    Loaded(Box<BuildSnapshot>),
}

#[derive(Debug, Clone)]
pub struct SnapshotLoader {
    api: ApiClient,
}

impl SnapshotLoader {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch a snapshot for `project`, honoring `cancel` throughout.
    ///
    /// Cancellation wins over any in-flight request; a consumer that
    /// switched projects must never seed from the stale load.
    pub async fn load(
        &self,
        project: &ProjectId,
        cancel: &CancellationToken,
    ) -> Result<Seed, LoadError> {
        tokio::select! {
            result = self.fetch(project) => result,
            _ = cancel.cancelled() => Err(LoadError::Cancelled),
        }
    }

    async fn fetch(&self, project: &ProjectId) -> Result<Seed, LoadError> {
        let (status, phases, logs, summary, manifest) = tokio::join!(
            self.api.build_status(project),
            self.api.phases(project),
            self.api.logs(project, LOG_BACKFILL),
            self.api.summary(project),
            self.api.manifest(project),
        );

        let Some(build) = status? else {
            return Ok(Seed::NoBuild);
        };
        let phases = phases?;

        let logs = logs.unwrap_or_else(|e| {
            tracing::warn!(%project, error = %e, "snapshot: log backfill failed");
            Vec::new()
        });
        let summary = summary
            .map_err(|e| {
                tracing::warn!(%project, error = %e, "snapshot: cost summary unavailable");
            })
            .ok();
        let manifest = manifest.unwrap_or_else(|e| {
            tracing::warn!(%project, error = %e, "snapshot: manifest unavailable");
            Vec::new()
        });

        Ok(Seed::Loaded(Box::new(BuildSnapshot {
            build,
            phases,
            logs,
            summary,
            manifest,
        })))
    }
}
