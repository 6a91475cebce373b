//! Blocksmith - WordPress block theme generator
//!
//! Command-line entry point: dispatches to the generate, validate, and
//! palette subcommands.

use blocksmith::cli::{GenerateArgs, PaletteArgs, ValidateArgs};
use blocksmith::constants::APP_NAME;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Blocksmith - generate WordPress block themes from project configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a theme from a project file
    Generate(GenerateArgs),
    /// Validate a project file
    Validate(ValidateArgs),
    /// Show the harmonized palette with contrast ratios
    Palette(PaletteArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Palette(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("✗ {APP_NAME}: {error}");
        std::process::exit(error.exit_code());
    }
}
