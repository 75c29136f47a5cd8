pub use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wiki")]
#[command(about = "Inspect access decisions for a seeded wiki")]
pub struct Args {
    /// Path to the wiki config directory (defaults to ~/.wiki)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Seed file to load instead of the configured one
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
