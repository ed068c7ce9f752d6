//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `suffix`: Print the ordinal suffix of each value
//! - `init`: Initialize ordinal configuration file

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{InputMode, OutputFormat};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct SuffixCommand {
    /// Values to resolve; read one per line from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// How to interpret values (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<InputMode>,

    /// Output format (overrides config file)
    #[arg(long, value_enum, env = "ORDINAL_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Print a summary of resolved and invalid values
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the English ordinal suffix (st, nd, rd, th) of each value
    Suffix(SuffixCommand),
    /// Initialize a new .ordinalrc.json configuration file
    Init,
}
