//! Shared utilities for CLI commands

use miette::Result;

use crate::cli::output::print_index;
use crate::cli::GlobalOpts;
use crate::entities::NameIndex;

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Only show names containing this text (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Apply search and limit to a fetched index
pub fn filter_index(index: NameIndex, args: &ListArgs) -> NameIndex {
    let search = args.search.as_ref().map(|s| s.to_lowercase());
    index
        .into_iter()
        .filter(|(name, _)| {
            search
                .as_ref()
                .map_or(true, |s| name.to_lowercase().contains(s))
        })
        .take(args.limit.unwrap_or(usize::MAX))
        .collect()
}

/// Filter and print a fetched index
pub fn run_list(
    index: NameIndex,
    args: &ListArgs,
    global: &GlobalOpts,
    key_label: &str,
    plural: &str,
) -> Result<()> {
    let index = filter_index(index, args);

    if args.count {
        println!("{}", index.len());
        return Ok(());
    }

    if index.is_empty() {
        if !global.quiet {
            println!("No {} found.", plural);
        }
        return Ok(());
    }

    print_index(&index, key_label, global.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> NameIndex {
        [("Murata", "3"), ("Yageo", "7"), ("Vishay Dale", "9")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_filter_by_search() {
        let args = ListArgs {
            search: Some("VISHAY".to_string()),
            ..ListArgs::default()
        };
        let filtered = filter_index(index(), &args);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("Vishay Dale"));
    }

    #[test]
    fn test_filter_limit_keeps_name_order() {
        let args = ListArgs {
            limit: Some(2),
            ..ListArgs::default()
        };
        let filtered: Vec<String> = filter_index(index(), &args).into_keys().collect();
        assert_eq!(filtered, vec!["Murata", "Vishay Dale"]);
    }
}
