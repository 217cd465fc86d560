//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ARTIK Cloud command-line client
#[derive(Parser, Debug)]
#[command(name = "artik-cloud")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API root, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// User access token, overrides the config file
    #[arg(long, global = true, env = "ARTIK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rules of a user
    #[command(subcommand)]
    Rules(RuleCommands),

    /// Devices of a user
    #[command(subcommand)]
    Devices(DeviceCommands),

    /// Device types
    #[command(subcommand)]
    DeviceTypes(DeviceTypeCommands),

    /// Tags
    #[command(subcommand)]
    Tags(TagCommands),
}

/// Paging flags shared by list commands
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Items per page (1-100)
    #[arg(long, default_value = "100", conflicts_with = "all")]
    pub count: u32,

    /// Offset of the first item
    #[arg(long, default_value = "0", conflicts_with = "all")]
    pub offset: u64,

    /// Fetch every page
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand, Debug)]
pub enum RuleCommands {
    /// Get a rule by id
    Get { id: String },

    /// List a user's rules
    List {
        /// User id
        #[arg(long)]
        uid: String,

        #[command(flatten)]
        page: PageArgs,

        /// public, public-or-owned, owned or unowned
        #[arg(long, default_value = "public-or-owned")]
        scope: String,

        /// Skip disabled rules
        #[arg(long)]
        exclude_disabled: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DeviceCommands {
    /// Get a device by id
    Get {
        id: String,

        /// Include device properties
        #[arg(long)]
        properties: bool,
    },

    /// List a user's devices
    List {
        /// User id
        #[arg(long)]
        uid: String,

        #[command(flatten)]
        page: PageArgs,

        /// Include devices shared with the user
        #[arg(long)]
        include_shared: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DeviceTypeCommands {
    /// List device types
    List {
        /// Name filter
        #[arg(long)]
        name: Option<String>,

        /// Tag filter (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// List all tags
    List,

    /// List tag categories
    Categories,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
