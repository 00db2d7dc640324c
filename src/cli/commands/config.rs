//! `aligni config` command - Configuration management
//!
//! Provides commands to view and modify the global Aligni configuration.

use clap::Subcommand;
use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{load_config, mask_secret};
use crate::cli::GlobalOpts;
use crate::core::config::{VALID_KEYS, ENV_API_TOKEN, ENV_CONFIG, ENV_TIMEOUT, ENV_URL_BASE};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration values
    Show(ShowArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset (remove) a configuration value
    Unset(UnsetArgs),

    /// Show path to the configuration file
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,

    /// Print the API token unmasked
    #[arg(long)]
    pub reveal: bool,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Configuration key (e.g., api_token, url_base)
    pub key: String,

    /// Value to set
    pub value: String,
}

#[derive(clap::Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key to remove
    pub key: String,
}

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args, global),
        ConfigCommands::Set(args) => run_set(args),
        ConfigCommands::Unset(args) => run_unset(args),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global);

    // If a specific key is requested, show just that value
    if let Some(key) = &args.key {
        let value = config.get(key).map_err(|e| miette::miette!("{}", e))?;
        return match value {
            Some(v) if key == "api_token" && !args.reveal => {
                println!("{}", mask_secret(&v));
                Ok(())
            }
            Some(v) => {
                println!("{}", v);
                Ok(())
            }
            None => Err(miette::miette!("Key '{}' is not set", key)),
        };
    }

    println!("{}", style("Effective Configuration").bold().underlined());
    println!();

    for (key, _) in VALID_KEYS {
        let value = config.get(key).map_err(|e| miette::miette!("{}", e))?;
        let value = match value {
            Some(v) if *key == "api_token" && !args.reveal => Some(mask_secret(&v)),
            other => other,
        };
        print_config_value(key, value.as_deref());
    }

    println!();
    println!("{}", style("Config Sources (in priority order):").dim());
    println!("  1. Command-line options (--token, --url)");
    println!(
        "  2. Environment variables ({}, {}, {})",
        ENV_API_TOKEN, ENV_URL_BASE, ENV_TIMEOUT
    );
    println!(
        "  3. Global config (~/.config/aligni/config.yaml, or ${})",
        ENV_CONFIG
    );

    Ok(())
}

fn run_set(args: SetArgs) -> Result<()> {
    let path = config_path()?;

    let mut config = Config::read_file(&path)
        .map_err(|e| miette::miette!("{}", e))?
        .unwrap_or_default();
    config
        .set(&args.key, &args.value)
        .map_err(|e| miette::miette!("{}", e))?;
    config
        .write_file(&path)
        .map_err(|e| miette::miette!("{}", e))?;

    let shown = if args.key == "api_token" {
        mask_secret(&args.value)
    } else {
        args.value.clone()
    };
    println!(
        "{} Set {} {} {}",
        style("✓").green(),
        style(&args.key).cyan(),
        style("→").dim(),
        style(shown).yellow()
    );

    Ok(())
}

fn run_unset(args: UnsetArgs) -> Result<()> {
    let path = config_path()?;

    let mut config = Config::read_file(&path)
        .map_err(|e| miette::miette!("{}", e))?
        .ok_or_else(|| miette::miette!("Config file does not exist: {}", path.display()))?;

    let removed = config
        .unset(&args.key)
        .map_err(|e| miette::miette!("{}", e))?;
    if !removed {
        return Err(miette::miette!("Key '{}' not found in config", args.key));
    }

    config
        .write_file(&path)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Removed {} from config",
        style("✓").green(),
        style(&args.key).cyan()
    );

    Ok(())
}

fn run_path() -> Result<()> {
    let path = config_path()?;
    println!("{}", path.display());
    Ok(())
}

fn run_keys() -> Result<()> {
    println!("{}", style("Available configuration keys:").bold());
    println!();

    for (key, description) in VALID_KEYS {
        println!("  {:<20} {}", style(key).cyan(), style(description).dim());
    }

    println!();
    println!(
        "{}",
        style("Use 'aligni config set <key> <value>' to set a value.").dim()
    );

    Ok(())
}

// Helper functions

fn config_path() -> Result<PathBuf> {
    Config::global_config_path()
        .ok_or_else(|| miette::miette!("Could not determine global config directory"))
}

fn print_config_value(key: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("  {}: {}", style(key).cyan(), style(v).yellow());
    } else {
        println!("  {}: {}", style(key).cyan(), style("(not set)").dim());
    }
}
