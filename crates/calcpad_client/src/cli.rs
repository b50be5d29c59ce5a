//! Command-line surface for the calcpad binary.

use crate::backend::normalize_server;
use calcpad_core::config::resolve_data_dir;
use calcpad_core::Config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "calcpad", about = "Terminal calculator backed by an evaluation service", version)]
pub struct Cli {
    /// Evaluation service URL (can also be set via CALCPAD_SERVER env var)
    #[arg(short, long, env = "CALCPAD_SERVER")]
    pub server: Option<String>,

    /// Directory for persisted history, memory, and preferences
    #[arg(short, long, env = "CALCPAD_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Keep session state in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Evaluate one expression and record it in the history
    Eval {
        /// Expression text, sent as entered
        expression: String,
    },
    /// Show or clear the history log
    History {
        #[arg(long)]
        clear: bool,
        /// Print entries as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show or clear the memory register
    Memory {
        #[arg(long)]
        clear: bool,
    },
}

fn explicit_override(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl Cli {
    /// Merge command-line overrides over environment configuration.
    pub fn resolve(&self, base: Config) -> Config {
        let server_url = explicit_override(self.server.clone())
            .map(|server| normalize_server(&server))
            .unwrap_or_else(|| normalize_server(&base.server_url));
        let data_dir = explicit_override(self.data_dir.clone())
            .map(|dir| resolve_data_dir(&dir))
            .unwrap_or(base.data_dir);
        Config {
            server_url,
            data_dir,
            timeout_secs: self.timeout.filter(|secs| *secs > 0).unwrap_or(base.timeout_secs),
            default_accent: base.default_accent,
            ephemeral: self.ephemeral || base.ephemeral,
        }
    }
}
