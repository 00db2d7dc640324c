//! CLI command implementations

pub mod utils;

pub mod completions;
pub mod config;
pub mod mfr;
pub mod part;
pub mod parttype;
pub mod subpart;
pub mod unit;
