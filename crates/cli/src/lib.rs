mod discover;
mod paths;

use clap::{Parser, Subcommand};
use shadescope_core::logging::LogOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shadescope",
    version,
    about = "Discover shading nodes on RenderMan search paths",
    long_about = "Shadescope walks the configured shader search paths and lists every \
                  .args and .oso node it finds, with aliases applied from .sdraliases files. \
                  Without explicit paths the RenderMan environment (RMAN_SHADERPATH, \
                  RMAN_RIXPLUGINPATH, RMANTREE) decides where to look."
)]
pub struct Cli {
    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory for log files (defaults to $SHADESCOPE_LOG_DIR or ~/.shadescope/logs)
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List discovered shader nodes
    #[command(
        long_about = "Runs discovery over the search paths and prints one row per node. \
                      Earlier search paths shadow later ones for the same identifier and type."
    )]
    Discover {
        /// Search path, highest priority first (repeatable). Overrides the environment.
        #[arg(short, long = "path", value_name = "DIR")]
        paths: Vec<PathBuf>,

        /// JSON discovery configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Ignore symbolic links
        #[arg(long)]
        no_follow_symlinks: bool,

        /// Directory levels to descend below each search path
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default search paths computed from the environment
    Paths,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut log_options = LogOptions::new("cli").with_stderr(cli.verbose);
    if let Some(dir) = &cli.log_dir {
        log_options = log_options.with_directory(dir.clone());
    }
    let _guard = match shadescope_runtime::init_logging(&log_options) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e}");
            None
        }
    };

    match cli.command {
        Commands::Discover {
            paths,
            config,
            no_follow_symlinks,
            max_depth,
            json,
        } => discover::run(discover::DiscoverArgs {
            paths,
            config,
            no_follow_symlinks,
            max_depth,
            json,
        }),
        Commands::Paths => paths::run(),
    }
}
