// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! `fg files` - list generated files or print one

use anyhow::Result;
use clap::Args;

use crate::color;
use crate::commands::Ctx;

#[derive(Args)]
pub struct FilesArgs {
    /// Print this file's content instead of the listing
    pub path: Option<String>,
}

pub async fn handle(ctx: &Ctx, args: FilesArgs) -> Result<()> {
    match args.path {
        Some(path) => {
            let content = ctx.api.file_content(&ctx.project, &path).await?;
            print!("{content}");
        }
        None => {
            let listing = ctx.api.file_listing(&ctx.project).await?;
            if listing.is_empty() {
                println!("No files generated yet");
                return Ok(());
            }
            for file in &listing {
                println!("{:>9}  {}", format_size(file.size_bytes), file.path);
            }
            println!("{}", color::muted(&format!("{} file(s)", listing.len())));
        }
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}
