use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dwm_config::config::Config;

#[derive(Parser)]
#[command(author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true,
)]
pub struct Args {
    /// Path of the configuration file [default: ~/.config/dwm-config/config.json]
    #[clap(short, long, global = true)]
    pub config: Option<String>,

    /// Log at debug level
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the configuration for mistakes
    Check,
    /// Print the effective configuration as JSON
    Dump,
    /// List the key bindings
    Keys,
    /// List the mouse button bindings
    Buttons,
    /// Show the action bound to a key chord
    ResolveKey {
        /// e.g. Mod4+Shift+Return
        #[clap(value_name = "CHORD")]
        chord: String,
    },
    /// Show the action bound to a click
    ResolveButton {
        /// tag-bar, lt-symbol, status-text, win-title, client-win or root-win
        #[clap(value_name = "CLICK")]
        click: String,
        /// e.g. Mod4+Button1
        #[clap(value_name = "CHORD")]
        chord: String,
    },
    /// Show the rule applied to a window
    MatchRule {
        #[clap(long)]
        class: Option<String>,
        #[clap(long)]
        instance: Option<String>,
        #[clap(long)]
        title: Option<String>,
    },
    /// Start the autostart programs
    Autostart {
        /// Only print the commands
        #[clap(short = 'n', long)]
        dry_run: bool,
    },
}

impl Args {
    pub fn config_path(&self) -> std::io::Result<PathBuf> {
        match &self.config {
            Some(path) => expanduser::expanduser(path),
            None => Config::default_path(),
        }
    }
}
