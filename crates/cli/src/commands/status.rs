// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! `fg status` - one-shot snapshot of the current build

use anyhow::Result;
use fg_client::{Seed, SnapshotLoader};
use fg_core::{Clock, SystemClock};
use tokio_util::sync::CancellationToken;

use crate::commands::Ctx;
use crate::output::{self, OutputFormat};

pub async fn handle(ctx: &Ctx, format: OutputFormat) -> Result<()> {
    let loader = SnapshotLoader::new(ctx.api.clone());
    let cancel = CancellationToken::new();

    let view = match loader.load(&ctx.project, &cancel).await? {
        Seed::NoBuild => fg_core::BuildView::no_build(ctx.project.clone()),
        Seed::Loaded(snapshot) => snapshot.into_view(ctx.project.clone()),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Text => output::print_status(&view, SystemClock.epoch_ms()),
    }
    Ok(())
}
