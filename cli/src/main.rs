use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;

use commands::extract::ExtractArgs;

#[derive(Parser)]
#[command(name = "wav-carve")]
#[command(about = "Carve embedded RIFF/WAVE audio out of binary containers", long_about = None)]
struct Cli {
    /// Log every buffer written
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every embedded WAVE stream into numbered .wav files
    Extract(ExtractArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    match cli.command {
        Commands::Extract(args) => {
            commands::extract::handle(args).context("Extracting wav streams")?
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_time_level(simplelog::LevelFilter::Off)
            .add_filter_allow_str("carve")
            .add_filter_allow_str("wav_carve")
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
