// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! `fg start` / `fg cancel` / `fg resume` - build lifecycle commands

use anyhow::Result;
use clap::Args;
use fg_client::{CommandDispatcher, StartOptions};
use fg_core::ResumeAction;

use crate::commands::Ctx;
use crate::output;

#[derive(Args)]
pub struct StartArgs {
    /// Target type to build (server default when omitted)
    #[arg(long)]
    pub target_type: Option<String>,

    /// Target reference, e.g. a design document id
    #[arg(long)]
    pub target_ref: Option<String>,

    /// Branch to build from
    #[arg(long)]
    pub branch: Option<String>,
}

#[derive(Args)]
pub struct CancelArgs {
    /// Kill the build immediately instead of at the next safe point
    #[arg(long)]
    pub force: bool,

    /// Halt all further builder API calls
    #[arg(long, conflicts_with = "force")]
    pub circuit_break: bool,
}

#[derive(Args)]
pub struct ResumeArgs {
    /// How to resume: retry, skip, edit, or abort
    pub action: ResumeAction,
}

pub async fn start(ctx: &Ctx, args: StartArgs) -> Result<()> {
    let dispatcher = CommandDispatcher::new(ctx.api.clone());
    let options = StartOptions {
        target_type: args.target_type,
        target_ref: args.target_ref,
        branch: args.branch,
    };
    let build = dispatcher.start(&ctx.project, &options).await?;
    println!("Build {} started ({})", build.id, output::status_word(build.status));
    Ok(())
}

pub async fn cancel(ctx: &Ctx, args: CancelArgs) -> Result<()> {
    let dispatcher = CommandDispatcher::new(ctx.api.clone());
    let build = if args.circuit_break {
        dispatcher.circuit_break(&ctx.project).await?
    } else if args.force {
        dispatcher.force_cancel(&ctx.project).await?
    } else {
        dispatcher.cancel(&ctx.project).await?
    };
    println!("Build {} is now {}", build.id, output::status_word(build.status));
    Ok(())
}

pub async fn resume(ctx: &Ctx, args: ResumeArgs) -> Result<()> {
    let dispatcher = CommandDispatcher::new(ctx.api.clone());
    dispatcher.resume(&ctx.project, args.action).await?;
    println!("Resume ({}) sent; watch the stream for the state change", args.action);
    Ok(())
}
