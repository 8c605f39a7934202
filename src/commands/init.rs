//! Writes the configuration file so it can be edited by hand.

use crate::libs::config::Config;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Database file; relative names resolve inside the data directory
    #[arg(short, long)]
    database: Option<String>,

    /// Default log filter, e.g. "schejzuren=debug"
    #[arg(short, long)]
    log_filter: Option<String>,
}

/// Keeps existing settings that were not given on the command line.
pub fn cmd(args: InitArgs) -> Result<()> {
    let mut config = Config::read()?;
    if let Some(database) = args.database {
        config.database_file = database;
    }
    if args.log_filter.is_some() {
        config.log_filter = args.log_filter;
    }
    config.save()?;
    Ok(())
}
