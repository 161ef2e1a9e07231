use std::path::PathBuf;

use assetpack::config::DEFAULT_CONFIG_FILE;
use assetpack::AssetType;
use clap::{Parser, Subcommand};

/// assetpack - build named JavaScript and CSS pipelines from configuration
#[derive(Parser, Debug)]
#[command(name = "assetpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file (.toml, .yaml or .yml)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Public web directory (overrides the wwwDir parameter and ASSETPACK_WWW_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub www_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve every section and print its pipeline and the loader registry
    Build,

    /// Print one section's effective configuration and resolved files
    Show {
        /// Asset type of the section
        #[arg(value_name = "css|js")]
        asset_type: AssetType,

        /// Section name
        name: String,
    },

    /// Print the public temp path published under a loader name
    Lookup {
        /// Loader name (case-insensitive)
        name: String,
    },
}
