//! polygen CLI - Schema-driven code generator
//!
//! Commands:
//! - `polygen generate` - Generate sources for every selected profile
//! - `polygen profiles` - List builtin profiles and their nullability tables
//! - `polygen check` - Validate a polygen.toml manifest

use clap::{Parser, Subcommand};
use polygen_logging::{LogLevel, init_logging};

mod generate;
mod manifest;
mod profiles;
mod writer;

#[derive(Parser)]
#[command(name = "polygen")]
#[command(author, version, about = "Schema-driven code generator", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off); overrides the manifest
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sources from a manifest
    Generate {
        /// Path to polygen.toml manifest
        #[arg(short, long)]
        manifest: Option<String>,

        /// Output root (default: manifest `output_root`)
        #[arg(short, long)]
        output: Option<String>,

        /// Profile to generate for; repeat for several (default: all)
        #[arg(short, long = "profile")]
        profile: Vec<String>,

        /// Category directory below `<profile>/output/`
        #[arg(short, long)]
        category: Option<String>,

        /// Compare against a fixture tree instead of writing files
        #[arg(long, value_name = "FIXTURES")]
        check: Option<String>,
    },

    /// List builtin target profiles
    Profiles,

    /// Validate a polygen.toml manifest
    Check {
        /// Path to polygen.toml (default: ./polygen.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level.unwrap_or_default())?;

    match cli.command {
        Commands::Generate {
            manifest,
            output,
            profile,
            category,
            check,
        } => {
            generate::run(generate::GenerateArgs {
                manifest,
                output,
                profiles: profile,
                category,
                check,
                log_level: cli.log_level,
            })?;
        }
        Commands::Profiles => {
            profiles::run()?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
    }

    Ok(())
}
