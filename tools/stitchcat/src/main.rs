mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{decode::DecodeArgs, schema::SchemaArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stitchcat",
    about = "Decode fragmented base64 records from logcat streams"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reassemble and decode records from a logcat stream
    Decode(DecodeArgs),
    /// Print the field definitions of a descriptor-set message
    Schema(SchemaArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(args) => args.run(),
        Commands::Schema(args) => args.run(),
    }
}
