// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! `fg instructions` - print post-completion deployment instructions

use anyhow::Result;

use crate::commands::Ctx;
use crate::failure::CommandFailed;

pub async fn handle(ctx: &Ctx) -> Result<()> {
    match ctx.api.instructions(&ctx.project).await {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(e) if e.status_code() == Some(404) => Err(CommandFailed::InstructionsPending.into()),
        Err(e) => Err(e.into()),
    }
}
