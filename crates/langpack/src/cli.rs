//! Command-line interface definition.

use clap::{Parser, Subcommand};
use langpack_config::AppConfig;
use std::path::PathBuf;

/// Inspect and switch installed language packs.
#[derive(Debug, Parser)]
#[command(name = "langpack", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding one folder per language
    #[arg(long, global = true, value_name = "PATH")]
    pub locale_root: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `langpack_i18n=trace`
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List installed languages with native name and country code
    List,

    /// Print the language chosen at startup
    Current,

    /// Print one translated string
    Get {
        /// Catalog category, e.g. `main_menu`
        category: String,

        /// Key inside the category
        key: String,
    },

    /// Switch to and remember a language
    Set {
        /// Language code, e.g. `ko`
        code: String,
    },

    /// Print the translated title screen
    Render,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(root) = &self.locale_root {
            config.localization.locale_root.clone_from(root);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}
