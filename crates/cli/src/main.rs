// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! `fg` - terminal console for ForgeGuard builds

use anyhow::Result;
use clap::{Parser, Subcommand};
use fg_client::{ApiClient, ApiConfig};
use tracing_subscriber::EnvFilter;

mod color;
mod commands;
mod config;
mod failure;
mod output;

use commands::build::{CancelArgs, ResumeArgs, StartArgs};
use commands::files::FilesArgs;
use commands::say::SayArgs;
use commands::Ctx;
use config::Settings;
use failure::CommandFailed;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "fg", version, about = "ForgeGuard build console", styles = color::styles())]
struct Cli {
    /// API base URL (or FORGEGUARD_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// API token (or FORGEGUARD_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Event stream URL (or FORGEGUARD_WS; derived from --url when unset)
    #[arg(long, global = true)]
    ws: Option<String>,

    /// Project to address (or FORGEGUARD_PROJECT)
    #[arg(short = 'p', long, global = true)]
    project: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Follow the current build live
    Watch,
    /// Show the current build state
    Status {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Start (or retry) a build
    Start(StartArgs),
    /// Cancel the running build
    Cancel(CancelArgs),
    /// Resume a paused build
    Resume(ResumeArgs),
    /// Send a message or slash command to the builder
    Say(SayArgs),
    /// Print deployment instructions for a completed build
    Instructions,
    /// List generated files, or print one
    Files(FilesArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CommandFailed>().map_or(1, CommandFailed::exit_code);
        eprintln!("error: {err:#}");
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli.url, cli.token, cli.ws)?;
    let ctx = context(&settings, cli.project)?;

    match cli.command {
        Command::Watch => commands::watch::handle(&ctx).await,
        Command::Status { format } => commands::status::handle(&ctx, format).await,
        Command::Start(args) => commands::build::start(&ctx, args).await,
        Command::Cancel(args) => commands::build::cancel(&ctx, args).await,
        Command::Resume(args) => commands::build::resume(&ctx, args).await,
        Command::Say(args) => commands::say::handle(&ctx, args).await,
        Command::Instructions => commands::instructions::handle(&ctx).await,
        Command::Files(args) => commands::files::handle(&ctx, args).await,
    }
}

fn context(settings: &Settings, project: Option<String>) -> Result<Ctx> {
    let project = project
        .or_else(|| std::env::var("FORGEGUARD_PROJECT").ok().filter(|v| !v.is_empty()))
        .ok_or_else(|| anyhow::anyhow!("no project; pass --project or set FORGEGUARD_PROJECT"))?;
    let api = ApiClient::new(ApiConfig::new(&settings.base_url, &settings.token))?;
    Ok(Ctx {
        api,
        ws_url: settings.ws_url.clone(),
        token: settings.token.clone(),
        project: project.as_str().into(),
    })
}
