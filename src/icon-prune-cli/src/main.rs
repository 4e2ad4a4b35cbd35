mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icon_prune=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.into_command() {
        Commands::Run(args) => commands::run::handle(args)?,

        Commands::Materials { url, format } => {
            commands::list::materials(url, format)?;
        }

        Commands::Emotions {
            url,
            manifest,
            format,
        } => {
            commands::list::emotions(url, manifest, format)?;
        }

        Commands::Avatars {
            url,
            copy_from,
            copy_to,
        } => {
            commands::avatars::handle(url, copy_from, copy_to)?;
        }

        Commands::Configure { show, init } => {
            commands::configure::handle(show, init)?;
        }
    }

    Ok(())
}
