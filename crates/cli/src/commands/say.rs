// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! `fg say` - interject into the running build

use anyhow::Result;
use clap::Args;
use fg_client::CommandDispatcher;

use crate::commands::Ctx;
use crate::failure::CommandFailed;

#[derive(Args)]
pub struct SayArgs {
    /// Message or slash command, e.g. "focus on tests" or "/pause"
    #[arg(required = true)]
    pub message: Vec<String>,
}

pub async fn handle(ctx: &Ctx, args: SayArgs) -> Result<()> {
    let message = args.message.join(" ");
    let dispatcher = CommandDispatcher::new(ctx.api.clone());
    let outcome = dispatcher.interject(&ctx.project, &message).await?;

    if outcome.status == "error" {
        return Err(CommandFailed::InterjectionRejected(outcome.toast).into());
    }
    println!("{}", outcome.toast);
    Ok(())
}
