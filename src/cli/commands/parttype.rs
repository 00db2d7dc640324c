//! `aligni parttype` command - Part type lookup
//!
//! Part types are only created implicitly, by `aligni part new`.

use clap::Subcommand;
use miette::Result;

use crate::cli::commands::utils::{run_list, ListArgs};
use crate::cli::helpers::{api_error, connect};
use crate::cli::GlobalOpts;

#[derive(Subcommand, Debug)]
pub enum PartTypeCommands {
    /// List part types keyed by name
    List(ListArgs),
}

/// Run a part type subcommand
pub fn run(cmd: PartTypeCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        PartTypeCommands::List(args) => {
            let mut client = connect(global)?;
            let index = client.get_part_types().map_err(api_error)?;
            run_list(index, &args, global, "name", "part types")
        }
    }
}
