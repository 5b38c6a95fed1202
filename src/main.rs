mod commands;
mod context;
mod form;
mod output;
mod platform;
mod traits;
mod wizard;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{GenerateArgs, GenerateCommand, PlatformsCommand, WizardCommand};
use context::Context;
use platform::PlatformRegistry;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hcpa")]
#[command(about = "HCP CLI Assistant - builds hcp create cluster commands from your answers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the cluster questions step by step
    Wizard {
        /// Platform to preselect instead of choosing interactively
        #[arg(short, long)]
        platform: Option<String>,
    },

    /// Build a command directly from flags, without prompts
    Generate(GenerateArgs),

    /// List the platforms the assistant can generate commands for
    Platforms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::new();
    let registry = Arc::new(PlatformRegistry::with_defaults());

    match cli.command {
        Commands::Wizard { platform } => {
            WizardCommand::execute(&ctx, Arc::clone(&registry), platform.as_deref())?;
        }
        Commands::Generate(args) => {
            GenerateCommand::execute(&ctx, &registry, args)?;
        }
        Commands::Platforms => {
            PlatformsCommand::execute(&ctx, &registry)?;
        }
    }

    Ok(())
}
