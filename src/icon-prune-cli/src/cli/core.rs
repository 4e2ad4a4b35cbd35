//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use icon_prune::Settings;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "icon-prune")]
#[command(about = "Build minimum icon folders from Snap metadata", long_about = None)]
pub struct Cli {
    // Without a subcommand these drive a full `run`
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to execute, `run` when none was given
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run(self.run))
    }
}

/// Output format for filter set listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Lines,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch metadata and copy referenced item and emotion icons
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Print the icon file names of useful materials
    #[command(visible_alias = "m")]
    Materials {
        /// Material metadata URL
        #[arg(long, env = "ICON_PRUNE_MATERIAL_URL")]
        url: Option<String>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the emotion icon file names listed in the URI manifest
    #[command(visible_alias = "e")]
    Emotions {
        /// Emotion manifest URL
        #[arg(long, env = "ICON_PRUNE_EMOTION_URL")]
        url: Option<String>,

        /// Where to persist the fetched manifest
        #[arg(long, env = "ICON_PRUNE_MANIFEST")]
        manifest: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Extract skill and talent icons per avatar and print them as JSON
    #[command(visible_alias = "a")]
    Avatars {
        /// Avatar metadata URL
        #[arg(long, env = "ICON_PRUNE_AVATAR_URL")]
        url: Option<String>,

        /// Copy every referenced avatar icon from this folder...
        #[arg(long, requires = "copy_to")]
        copy_from: Option<PathBuf>,

        /// ...into this folder
        #[arg(long, requires = "copy_from")]
        copy_to: Option<PathBuf>,
    },

    /// Show or initialize the configuration file
    #[command(visible_alias = "c")]
    Configure {
        /// Show the effective configuration
        #[arg(long)]
        show: bool,

        /// Write the built-in defaults to the configuration file
        #[arg(long, conflicts_with = "show")]
        init: bool,
    },
}

/// Overrides for a pruning run; anything unset comes from the config file
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Material metadata URL
    #[arg(long, env = "ICON_PRUNE_MATERIAL_URL")]
    pub material_url: Option<String>,

    /// Emotion manifest URL
    #[arg(long, env = "ICON_PRUNE_EMOTION_URL")]
    pub emotion_url: Option<String>,

    /// Folder holding the full item icon set
    #[arg(long, env = "ICON_PRUNE_ITEM_SOURCE")]
    pub item_source: Option<PathBuf>,

    /// Output folder for item icons
    #[arg(long, env = "ICON_PRUNE_ITEM_DEST")]
    pub item_dest: Option<PathBuf>,

    /// Folder holding the full emotion icon set
    #[arg(long, env = "ICON_PRUNE_EMOTION_SOURCE")]
    pub emotion_source: Option<PathBuf>,

    /// Output folder for emotion icons
    #[arg(long, env = "ICON_PRUNE_EMOTION_DEST")]
    pub emotion_dest: Option<PathBuf>,

    /// Where to persist the fetched emotion manifest
    #[arg(long, env = "ICON_PRUNE_MANIFEST")]
    pub manifest: Option<PathBuf>,
}

impl RunArgs {
    /// Apply every override that was given
    pub fn apply(self, settings: &mut Settings) {
        if let Some(url) = self.material_url {
            settings.material_url = url;
        }
        if let Some(url) = self.emotion_url {
            settings.emotion_url = url;
        }
        if let Some(path) = self.item_source {
            settings.item_source = path;
        }
        if let Some(path) = self.item_dest {
            settings.item_destination = path;
        }
        if let Some(path) = self.emotion_source {
            settings.emotion_source = path;
        }
        if let Some(path) = self.emotion_dest {
            settings.emotion_destination = path;
        }
        if let Some(path) = self.manifest {
            settings.manifest_path = path;
        }
    }
}
