// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Typed REST client for the ForgeGuard build API.
//!
//! One method per endpoint; every call attaches the bearer token and runs
//! under the configured timeout. Non-2xx responses surface as
//! [`ApiError::Status`] with the body text preserved for display.

use crate::error::ApiError;
use fg_core::snapshot::{CostSummary, LogLine};
use fg_core::{Build, ManifestFile, Phase, ProjectId, ResumeAction};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default bound on REST calls; the backend specifies none, but hanging a
/// console on a dead connection is worse than a retryable error.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://forge.example.com/api`.
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Optional body for `POST /build` (start or retry).
#[derive(Debug, Clone, Default, Serialize)]
pub struct StartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Response of `POST /build/interject`.
#[derive(Debug, Clone, Deserialize)]
pub struct InterjectAck {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Manifest listing row from `GET /build/files`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileListing {
    pub path: String,
    #[serde(default)]
    pub size_bytes: u64,
}

#[derive(Serialize)]
struct ResumeBody {
    action: ResumeAction,
}

#[derive(Serialize)]
struct InterjectBody<'a> {
    message: &'a str,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    fn url(&self, project: &ProjectId, rest: &str) -> String {
        format!("{}/projects/{}/build{}", self.base_url, project, rest)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { code: status.as_u16(), body })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get_text(&self, url: String) -> Result<String, ApiError> {
        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        Ok(Self::check(response).await?.text().await?)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: String,
        body: Option<&impl Serialize>,
    ) -> Result<T, ApiError> {
        let mut request = self.http.post(&url).bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `GET /build/status`. A 400 means "no build exists yet" and maps to
    /// `Ok(None)`, not an error.
    pub async fn build_status(&self, project: &ProjectId) -> Result<Option<Build>, ApiError> {
        let url = self.url(project, "/status");
        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        if response.status().as_u16() == 400 {
            return Ok(None);
        }
        Ok(Some(Self::check(response).await?.json().await?))
    }

    /// `GET /build/phases` — the ordered phase catalogue.
    pub async fn phases(&self, project: &ProjectId) -> Result<Vec<Phase>, ApiError> {
        self.get_json(self.url(project, "/phases")).await
    }

    /// `GET /build/logs?limit=N` — bounded historical log lines.
    pub async fn logs(&self, project: &ProjectId, limit: usize) -> Result<Vec<LogLine>, ApiError> {
        self.get_json(self.url(project, &format!("/logs?limit={limit}"))).await
    }

    /// `GET /build/summary` — cost totals and per-phase breakdown.
    pub async fn summary(&self, project: &ProjectId) -> Result<CostSummary, ApiError> {
        self.get_json(self.url(project, "/summary")).await
    }

    /// `GET /build/files` — current manifest listing.
    pub async fn manifest(&self, project: &ProjectId) -> Result<Vec<ManifestFile>, ApiError> {
        self.get_json(self.url(project, "/files")).await
    }

    /// `GET /build/files` as a plain listing (path + size).
    pub async fn file_listing(&self, project: &ProjectId) -> Result<Vec<FileListing>, ApiError> {
        self.get_json(self.url(project, "/files")).await
    }

    /// `GET /build/files/{path}` — one generated file's content.
    pub async fn file_content(&self, project: &ProjectId, path: &str) -> Result<String, ApiError> {
        self.get_text(self.url(project, &format!("/files/{path}"))).await
    }

    /// `GET /build/instructions` — post-completion deployment instructions.
    pub async fn instructions(&self, project: &ProjectId) -> Result<String, ApiError> {
        self.get_text(self.url(project, "/instructions")).await
    }

    /// `POST /build` — start (or retry) a build.
    pub async fn start_build(
        &self,
        project: &ProjectId,
        options: &StartOptions,
    ) -> Result<Build, ApiError> {
        self.post_json(self.url(project, ""), Some(options)).await
    }

    /// `POST /build/cancel` — graceful cancel; returns the updated build.
    pub async fn cancel(&self, project: &ProjectId) -> Result<Build, ApiError> {
        self.post_json(self.url(project, "/cancel"), None::<&()>).await
    }

    /// `POST /build/force-cancel`.
    pub async fn force_cancel(&self, project: &ProjectId) -> Result<Build, ApiError> {
        self.post_json(self.url(project, "/force-cancel"), None::<&()>).await
    }

    /// `POST /build/circuit-break` — halt all further builder API calls.
    pub async fn circuit_break(&self, project: &ProjectId) -> Result<Build, ApiError> {
        self.post_json(self.url(project, "/circuit-break"), None::<&()>).await
    }

    /// `POST /build/resume` with one of the fixed resume actions. The state
    /// change arrives as a `build_resumed` event, not in the response.
    pub async fn resume(&self, project: &ProjectId, action: ResumeAction) -> Result<(), ApiError> {
        let url = self.url(project, "/resume");
        let request = self.http.post(&url).bearer_auth(&self.token).json(&ResumeBody { action });
        let response = request.send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `POST /build/interject` — free text and slash commands alike.
    pub async fn interject(
        &self,
        project: &ProjectId,
        message: &str,
    ) -> Result<InterjectAck, ApiError> {
        self.post_json(self.url(project, "/interject"), Some(&InterjectBody { message })).await
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
