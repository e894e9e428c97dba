use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "notion-utils")]
#[command(about = "Helpers for Notion export scripts: token lookup, page ids and file names")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file (defaults to ./notion-utils.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the Notion token from the environment or the nearest .env.notion
    Token {
        /// Environment variable to check first
        #[arg(long)]
        env_var: Option<String>,

        /// Name of the KEY=value file searched upwards from --start-dir
        #[arg(long)]
        file: Option<String>,

        /// Directory the file search starts from
        #[arg(long)]
        start_dir: Option<PathBuf>,
    },

    /// Turn titles into file-system safe names
    Sanitize {
        #[arg(required = true)]
        names: Vec<String>,

        /// Append this extension to every name
        #[arg(long)]
        ext: Option<String>,
    },

    /// Reduce page URLs or ids to the bare 32-character id
    ExtractId {
        #[arg(required = true)]
        references: Vec<String>,

        /// Print the hyphenated UUID form
        #[arg(long)]
        hyphenated: bool,

        /// Fail on references that contain no page id
        #[arg(long)]
        strict: bool,
    },

    /// Insert UUID hyphens into 32-character ids
    FormatId {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Create directories and any missing parents
    EnsureDir {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}
