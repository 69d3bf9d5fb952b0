// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Connection settings: flags first, environment second.

use anyhow::{bail, Result};

pub const ENV_URL: &str = "FORGEGUARD_URL";
pub const ENV_TOKEN: &str = "FORGEGUARD_TOKEN";
pub const ENV_WS: &str = "FORGEGUARD_WS";

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub ws_url: String,
    pub token: String,
}

impl Settings {
    /// Resolve settings from CLI flags, falling back to the environment.
    ///
    /// The WebSocket URL is derived from the base URL when neither the flag
    /// nor `FORGEGUARD_WS` provides one.
    pub fn resolve(
        url: Option<String>,
        token: Option<String>,
        ws: Option<String>,
    ) -> Result<Settings> {
        let Some(base_url) = url.or_else(|| env_var(ENV_URL)) else {
            bail!("no server URL; pass --url or set {ENV_URL}");
        };
        let Some(token) = token.or_else(|| env_var(ENV_TOKEN)) else {
            bail!("no API token; pass --token or set {ENV_TOKEN}");
        };
        let ws_url = ws
            .or_else(|| env_var(ENV_WS))
            .unwrap_or_else(|| derive_ws_url(&base_url));
        Ok(Settings { base_url, ws_url, token })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Derive the event stream URL from the REST base URL.
pub fn derive_ws_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let swapped = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_string()
    };
    format!("{swapped}/events")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
