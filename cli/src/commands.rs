pub mod call;
pub mod extract;
pub mod info;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use ipsift_common::network::family::IpFamily;

#[derive(Parser)]
#[command(name = "ipsift")]
#[command(version, about = "Extract unique IPv4 and IPv6 addresses from text.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as a JSON array
    #[arg(long, global = true)]
    pub json: bool,

    /// Reduce terminal output (-q hides headers, -qq also hides the summary)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract addresses from arguments, files or stdin
    #[command(alias = "e")]
    Extract {
        /// Texts to search; stdin is read when no text or file is given
        texts: Vec<String>,
        /// Read a text from a file (repeatable)
        #[arg(short, long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,
        /// Only keep addresses of one family
        #[arg(long, value_name = "4|6")]
        ip_version: Option<IpFamily>,
    },
    /// Invoke a registered action with JSON arguments
    #[command(alias = "c")]
    Call {
        /// Bare or namespace-qualified action name
        action: String,
        /// JSON argument object; read from stdin when omitted
        args: Option<String>,
    },
    /// List the registered actions
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
