//! Rendering of API results for the terminal

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{escape_csv, escape_md};
use crate::cli::OutputFormat;
use crate::entities::{NameIndex, Part};

/// Print a name → id index; `key_label` names the key column
pub fn print_index(index: &NameIndex, key_label: &str, format: OutputFormat) -> Result<()> {
    let format = match format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(index).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(index).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("{},id", key_label);
            for (name, id) in index {
                println!("{},{}", escape_csv(name), escape_csv(id));
            }
        }
        OutputFormat::Md => {
            println!("| {} | ID |", key_label);
            println!("|---|---|");
            for (name, id) in index {
                println!("| {} | {} |", escape_md(name), escape_md(id));
            }
        }
        OutputFormat::Id => {
            for id in index.values() {
                println!("{}", id);
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            println!(
                "{}\t{}",
                style(key_label.to_uppercase()).bold(),
                style("ID").bold()
            );
            for (name, id) in index {
                println!("{}\t{}", name, id);
            }
        }
    }

    Ok(())
}

/// Print a newly created part
pub fn print_part(part: &Part, format: OutputFormat, quiet: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(part).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(part).into_diagnostic()?);
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            let sep = if format == OutputFormat::Csv { ',' } else { '\t' };
            println!("{}{}{}", part.part_id, sep, part.revision_id);
        }
        OutputFormat::Id => println!("{}", part.part_id),
        OutputFormat::Auto | OutputFormat::Md => {
            if quiet {
                println!("{}", part.part_id);
            } else {
                println!(
                    "{} Created part {} (revision {})",
                    style("✓").green(),
                    style(&part.part_id).cyan(),
                    style(&part.revision_id).yellow()
                );
            }
        }
    }
    Ok(())
}

/// Print the id of a newly created reference entity
pub fn print_created(label: &str, name: &str, id: &str, format: OutputFormat, quiet: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "name": name, "id": id });
            println!("{}", serde_json::to_string_pretty(&value).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            let mut index = NameIndex::new();
            index.insert(name.to_string(), id.to_string());
            print!("{}", serde_yml::to_string(&index).into_diagnostic()?);
        }
        _ if quiet || format == OutputFormat::Id => println!("{}", id),
        _ => println!(
            "{} Created {} {} {}",
            style("✓").green(),
            label,
            style(name).cyan(),
            style(format!("(id {})", id)).dim()
        ),
    }
    Ok(())
}
