//! `aligni mfr` command - Manufacturer management

use clap::Subcommand;
use miette::Result;

use crate::cli::commands::utils::{run_list, ListArgs};
use crate::cli::helpers::{api_error, connect};
use crate::cli::output::print_created;
use crate::cli::GlobalOpts;

#[derive(Subcommand, Debug)]
pub enum MfrCommands {
    /// List manufacturers keyed by name
    List(ListArgs),

    /// Create a new manufacturer
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Manufacturer name
    #[arg(long, short = 'n')]
    pub name: String,
}

/// Run a manufacturer subcommand
pub fn run(cmd: MfrCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        MfrCommands::List(args) => {
            let mut client = connect(global)?;
            let index = client.get_manufacturer_list().map_err(api_error)?;
            run_list(index, &args, global, "name", "manufacturers")
        }
        MfrCommands::New(args) => {
            let mut client = connect(global)?;
            let id = client.create_manufacturer(&args.name).map_err(api_error)?;
            print_created("manufacturer", &args.name, &id, global.format, global.quiet)
        }
    }
}
