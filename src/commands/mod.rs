//! Command-line interface.
//!
//! - `init`: write a default `config.json` to the data directory
//! - `serve`: answer bridge requests, one JSON line each, on stdin/stdout
//! - `call`: invoke a single bridge method and print its result

pub mod call;
pub mod init;
pub mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write the default configuration file")]
    Init(init::InitArgs),
    #[command(about = "Serve bridge requests as JSON lines on stdin/stdout")]
    Serve,
    #[command(about = "Call one bridge method", arg_required_else_help = true)]
    Call(call::CallArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve => serve::cmd(),
            Commands::Call(args) => call::cmd(args),
        }
    }
}
