use clap::{Args, Parser, Subcommand, ValueEnum};
use folioapp::codec::RawItem;
use folioapp::model::BackendKind;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    bin_name = "folio",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Manage the project cards of a portfolio page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Store to operate on: local or remote [default: from config]
    #[arg(short, long, global = true, help_heading = "Options")]
    pub backend: Option<BackendKind>,

    /// Data directory (overrides FOLIO_DATA)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Text,
        help_heading = "Options"
    )]
    pub output: OutputMode,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a project to the end of the list
    #[command(alias = "n", display_order = 2)]
    Create {
        #[command(flatten)]
        fields: ItemArgs,
    },

    /// Replace the project at an index
    #[command(alias = "e", display_order = 3)]
    Update {
        /// Zero-based position (or item id)
        #[arg(allow_negative_numbers = true)]
        index: String,

        #[command(flatten)]
        fields: ItemArgs,
    },

    /// Remove the project at an index
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Zero-based position (or item id)
        #[arg(allow_negative_numbers = true)]
        index: String,
    },

    /// Print <project-card> markup, one element per line
    #[command(display_order = 5)]
    Render,

    /// Manage the remote master key
    #[command(display_order = 10)]
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Show the resolved configuration
    #[command(display_order = 11)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SecretAction {
    /// Save a master key in the local data directory
    Set { value: String },
    /// Remove the saved master key
    Clear,
    /// Show where the active master key comes from
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print a commented folio.toml with every setting
    Gen,
}

/// Project fields. Required ones are checked by folio, not by the parser, so a missing
/// field reports the same message on every backend.
#[derive(Args, Debug, Default, Clone)]
pub struct ItemArgs {
    /// Card title (required)
    #[arg(long)]
    pub title: Option<String>,

    /// Image URL (required)
    #[arg(long)]
    pub img_src: Option<String>,

    /// Image alt text
    #[arg(long)]
    pub img_alt: Option<String>,

    /// Description (required)
    #[arg(long)]
    pub description: Option<String>,

    /// Link URL (required)
    #[arg(long)]
    pub href: Option<String>,

    /// Link label [default: "Learn more"]
    #[arg(long)]
    pub link_text: Option<String>,

    /// Free-form date label
    #[arg(long)]
    pub date: Option<String>,

    /// Comma-separated tags, e.g. "rust,cli"
    #[arg(long)]
    pub tags: Option<String>,
}

impl From<ItemArgs> for RawItem {
    fn from(args: ItemArgs) -> Self {
        RawItem {
            title: args.title,
            img_src: args.img_src,
            img_alt: args.img_alt,
            description: args.description,
            href: args.href,
            link_text: args.link_text,
            date: args.date,
            tags: args.tags,
        }
    }
}
