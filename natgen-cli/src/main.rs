// natgen-cli: CLI entry point for the natives binding generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "natgen", about = "natgen CLI — typed C# native bindings from a natives DB")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate C# bindings from the natives DB JSON.
    Generate {
        /// Path to natgen.config.toml.
        #[arg(long, default_value = "natgen.config.toml")]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { config } => {
            if let Err(e) = natgen_codegen::run_generate(&config) {
                eprintln!("natgen: error: {e}");
                std::process::exit(1);
            }
        }
    }
}
