use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use unicorn_options::DEFAULT_BASE_URL;

/// CLI arguments for unicorn
#[derive(Parser, Debug)]
#[command(name = "unicorn")]
#[command(about = "Generate module options for the Unicorn options compiler")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered modules
    Modules,

    /// Print a module's default configuration as JSON
    Defaults {
        /// Module name, e.g. "buttons"
        module: String,

        /// Only show properties matching these glob patterns
        #[arg(short, long)]
        query: Vec<String>,
    },

    /// Generate the options document for a module
    Generate {
        /// Module name, e.g. "buttons"
        module: String,

        /// JSON file with property edits applied on top of the defaults
        #[arg(short, long)]
        edits: Option<PathBuf>,

        /// Single property edit as key=value, applied after --edits
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Reject edits for properties the module does not define
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Body)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the build route for a module
    Endpoint {
        /// Module name, e.g. "buttons"
        module: String,

        /// Base address of the options compiler
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Extract compiled stylesheets from a saved build response
    ParseResponse {
        /// Module name, e.g. "buttons"
        module: String,

        /// JSON response file
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raw stylesheet-variable statements
    Body,
    /// `{name, body}` as JSON
    Json,
    /// Request payload for the build route
    Payload,
}
