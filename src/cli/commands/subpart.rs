//! `aligni subpart` command - BOM line management

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{api_error, connect};
use crate::cli::GlobalOpts;
use crate::entities::NewSubpart;

#[derive(Subcommand, Debug)]
pub enum SubpartCommands {
    /// Add a child part revision to a parent part's BOM
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Aligni id of the parent part
    #[arg(long)]
    pub part: String,

    /// Aligni id of the parent part revision
    #[arg(long)]
    pub part_revision: String,

    /// Aligni id of the child part revision
    #[arg(long)]
    pub subpart_revision: String,

    /// Manufacturer part number of the child
    #[arg(long, short = 'm')]
    pub mpn: String,

    /// Internal part number of the child
    #[arg(long, short = 'p')]
    pub partnumber: String,

    /// Quantity per parent
    #[arg(long, short = 'n', default_value_t = 1.0)]
    pub quantity: f64,

    /// Reference designator(s)
    #[arg(long, short = 'd', default_value = "")]
    pub designator: String,

    /// BOM line comment
    #[arg(long, short = 'c', default_value = "")]
    pub comment: String,
}

impl From<NewArgs> for NewSubpart {
    fn from(args: NewArgs) -> Self {
        NewSubpart {
            parent_part_id: args.part,
            parent_revision_id: args.part_revision,
            subpart_revision_id: args.subpart_revision,
            manufacturer_pn: args.mpn,
            partnumber: args.partnumber,
            quantity: args.quantity,
            designator: args.designator,
            comment: args.comment,
        }
    }
}

/// Run a subpart subcommand
pub fn run(cmd: SubpartCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SubpartCommands::New(args) => run_new(args, global),
    }
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let mut client = connect(global)?;
    let subpart = NewSubpart::from(args);
    client.create_subpart(&subpart).map_err(api_error)?;

    if !global.quiet {
        println!(
            "{} Added {} x {} to part {} (revision {})",
            style("✓").green(),
            subpart.quantity,
            style(&subpart.partnumber).cyan(),
            style(&subpart.parent_part_id).cyan(),
            style(&subpart.parent_revision_id).yellow()
        );
    }
    Ok(())
}
