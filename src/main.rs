//! assetpack CLI - build named JavaScript and CSS pipelines
//!
//! Usage: assetpack [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build   Resolve every section and print pipelines and loaders
//!   show    Print one section's effective configuration
//!   lookup  Print the temp path published under a loader name

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context {
        config: cli.config,
        www_dir: cli.www_dir,
        json: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Build => commands::build::cmd_build(&ctx),
        Commands::Show { asset_type, name } => commands::show::cmd_show(&ctx, asset_type, &name),
        Commands::Lookup { name } => commands::lookup::cmd_lookup(&ctx, &name),
    }
}
