//! `aligni part` command - Part management

use clap::Subcommand;
use miette::Result;

use crate::cli::commands::utils::{run_list, ListArgs};
use crate::cli::helpers::{api_error, connect};
use crate::cli::output::print_part;
use crate::cli::GlobalOpts;
use crate::entities::{AlternatePart, NewPart};

#[derive(Subcommand, Debug)]
pub enum PartCommands {
    /// Create a part and its first revision
    New(NewArgs),

    /// List parts keyed by manufacturer part number
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Internal part number
    #[arg(long, short = 'p')]
    pub partnumber: String,

    /// Manufacturer part number
    #[arg(long, short = 'm')]
    pub mpn: String,

    /// Manufacturer name (created in Aligni if unknown)
    #[arg(long, short = 'M')]
    pub manufacturer: String,

    /// Part type name (created in Aligni if unknown)
    #[arg(long = "type", short = 't')]
    pub part_type: String,

    /// Unit name (created in Aligni if unknown)
    #[arg(long, short = 'u')]
    pub units: String,

    /// Revision name
    #[arg(long, short = 'r')]
    pub revision: String,

    /// Revision description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Revision comment
    #[arg(long, short = 'c', default_value = "")]
    pub comment: String,

    /// Alternate part as ID[:QUALITY[:COMMENT]] (repeatable)
    #[arg(long = "alternate", short = 'a')]
    pub alternates: Vec<AlternatePart>,
}

impl From<NewArgs> for NewPart {
    fn from(args: NewArgs) -> Self {
        NewPart {
            partnumber: args.partnumber,
            manufacturer_pn: args.mpn,
            manufacturer: args.manufacturer,
            part_type: args.part_type,
            units: args.units,
            revision: args.revision,
            description: args.description,
            comment: args.comment,
            alternates: args.alternates,
        }
    }
}

/// Run a part subcommand
pub fn run(cmd: PartCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        PartCommands::New(args) => run_new(args, global),
        PartCommands::List(args) => run_list_parts(args, global),
    }
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let mut client = connect(global)?;
    let part = NewPart::from(args);
    let created = client.create_part(&part).map_err(api_error)?;
    print_part(&created, global.format, global.quiet)
}

fn run_list_parts(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let mut client = connect(global)?;
    let index = client.get_parts_list().map_err(api_error)?;
    run_list(index, &args, global, "manufacturer_pn", "parts")
}
