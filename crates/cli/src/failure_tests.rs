// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

use super::*;

#[test]
fn rejected_interjection_carries_the_toast() {
    let failed = CommandFailed::InterjectionRejected("build is terminal".into());
    assert_eq!(failed.to_string(), "build is terminal");
    assert_eq!(failed.exit_code(), 2);
}

#[test]
fn pending_instructions_exit_distinctly() {
    let failed = CommandFailed::InstructionsPending;
    assert_eq!(
        failed.to_string(),
        "no instructions yet; the build has not completed"
    );
    assert_eq!(failed.exit_code(), 2);
}

#[test]
fn downcasts_from_anyhow_for_the_exit_path() {
    let err: anyhow::Error = CommandFailed::InstructionsPending.into();
    let code = err.downcast_ref::<CommandFailed>().map_or(1, CommandFailed::exit_code);
    assert_eq!(code, 2);

    let plain = anyhow::anyhow!("connection refused");
    let code = plain.downcast_ref::<CommandFailed>().map_or(1, CommandFailed::exit_code);
    assert_eq!(code, 1);
}
