//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Category tree inspection for mod-manager state files
#[derive(Parser, Debug)]
#[command(name = "modcat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show categories as a tree with mod counts
    Tree {
        /// JSON state file (categories + mods)
        #[arg(value_hint = ValueHint::FilePath)]
        state: PathBuf,

        /// JSON translation map for subtitles
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        locale: Option<PathBuf>,
    },

    /// List leaf categories
    Leaves {
        /// JSON state file
        #[arg(value_hint = ValueHint::FilePath)]
        state: PathBuf,
    },

    /// List categories whose declared parent is missing
    Orphans {
        /// JSON state file
        #[arg(value_hint = ValueHint::FilePath)]
        state: PathBuf,
    },

    /// Show mod counts per category
    Counts {
        /// JSON state file
        #[arg(value_hint = ValueHint::FilePath)]
        state: PathBuf,

        /// Include categories without mods (overrides config)
        #[arg(long)]
        all: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
