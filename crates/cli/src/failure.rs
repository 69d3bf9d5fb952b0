// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Command failures that map to a dedicated process exit code.
//!
//! Commands return one of these instead of calling `std::process::exit()`;
//! `main()` downcasts and terminates with [`CommandFailed::exit_code`].
//! Anything else that bubbles up exits 1.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandFailed {
    /// The backend rejected an interjection; the toast says why.
    #[error("{0}")]
    InterjectionRejected(String),

    /// Deployment instructions only exist once a build has completed.
    #[error("no instructions yet; the build has not completed")]
    InstructionsPending,
}

impl CommandFailed {
    /// Exit code reported to the shell, distinct from the generic 1 so
    /// scripts can tell "backend said no" from "something broke".
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InterjectionRejected(_) | Self::InstructionsPending => 2,
        }
    }
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
