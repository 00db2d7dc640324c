//! Shared helper functions for CLI commands

use crate::api::{AligniClient, AligniError};
use crate::cli::GlobalOpts;
use crate::core::Config;

/// Effective configuration: files and environment, then command-line overrides
pub fn load_config(global: &GlobalOpts) -> Config {
    let mut config = Config::load();
    config.merge(Config {
        api_token: global.token.clone(),
        url_base: global.url.clone(),
        ..Config::default()
    });
    config
}

/// Client built from the effective configuration
pub fn connect(global: &GlobalOpts) -> miette::Result<AligniClient> {
    load_config(global)
        .client()
        .map_err(|e| miette::miette!("{}", e))
}

/// Turn an API error into a diagnostic with a hint where one helps
pub fn api_error(err: AligniError) -> miette::Report {
    match err {
        AligniError::RateLimited => miette::miette!(
            help = "wait a minute before retrying, or raise rate_limit_secs",
            "{}",
            err
        ),
        AligniError::Transport(_) => miette::miette!(
            help = "check url_base and your network connection",
            "{}",
            err
        ),
        AligniError::BadRequest { .. } => miette::miette!(
            help = "Aligni rejected the request; the message above is the raw server response",
            "{}",
            err
        ),
        other => miette::miette!("{}", other),
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Escape a string for a markdown table cell
pub fn escape_md(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

/// Mask all but the last four characters of a secret
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
