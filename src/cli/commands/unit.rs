//! `aligni unit` command - Unit management

use clap::Subcommand;
use miette::Result;

use crate::cli::commands::utils::{run_list, ListArgs};
use crate::cli::helpers::{api_error, connect};
use crate::cli::output::print_created;
use crate::cli::GlobalOpts;

#[derive(Subcommand, Debug)]
pub enum UnitCommands {
    /// List units keyed by name
    List(ListArgs),

    /// Create a new unit
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Unit name (e.g. Each, Meter, Reel)
    #[arg(long, short = 'n')]
    pub name: String,
}

/// Run a unit subcommand
pub fn run(cmd: UnitCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        UnitCommands::List(args) => {
            let mut client = connect(global)?;
            let index = client.get_units().map_err(api_error)?;
            run_list(index, &args, global, "name", "units")
        }
        UnitCommands::New(args) => {
            let mut client = connect(global)?;
            let id = client.create_unit(&args.name).map_err(api_error)?;
            print_created("unit", &args.name, &id, global.format, global.quiet)
        }
    }
}
