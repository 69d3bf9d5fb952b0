// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Error types for the ForgeGuard API client.

use thiserror::Error;

/// Errors from a single REST call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connect, timeout, TLS, body read.
    #[error("http transport: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {code}: {body}")]
    Status { code: u16, body: String },
}

impl ApiError {
    /// Status code of a server rejection, if that is what this error is.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            ApiError::Transport(_) => None,
        }
    }
}

/// Errors from the snapshot loader's seeding pass.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The load was cancelled before completing (unmount, project switch).
    #[error("snapshot load cancelled")]
    Cancelled,

    /// A critical-path request failed; the view cannot be seeded.
    #[error(transparent)]
    Api(#[from] ApiError),
}
