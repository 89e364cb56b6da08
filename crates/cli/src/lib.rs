mod analyze;
mod deps;
mod schema;
mod view;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bundlescope",
    version,
    about = "Asset bundle dependency and duplication analyzer",
    long_about = "Bundlescope discovers the asset bundles of a build output directory, \
                  computes their forward and reverse dependencies, and reports which \
                  assets end up in more than one bundle."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a build output directory
    #[command(
        long_about = "Discovers bundles (manifest first, then a signature scan), loads each \
                            one and prints a per-bundle summary. Settings are read from \
                            ~/.bundlescope/config.json unless --config is given."
    )]
    Analyze {
        /// Build output directory containing the bundles
        #[arg(value_name = "DIR")]
        path: PathBuf,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        /// Only analyze scene bundles
        #[arg(long)]
        scene_only: bool,

        /// Configuration file to use instead of the default one
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print the bundle dependency graph
    Deps {
        /// Build output directory containing the bundles
        #[arg(value_name = "DIR")]
        path: PathBuf,
    },
    /// Print the JSON schema of the analysis report
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = bundlescope_runtime::init_logging("cli", false);

    match cli.command {
        Commands::Analyze {
            path,
            json,
            scene_only,
            config,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(analyze::run(path, json, scene_only, config))
        }
        Commands::Deps { path } => deps::run(path),
        Commands::Schema => schema::run(),
    }
}
