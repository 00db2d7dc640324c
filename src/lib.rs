//! Aligni: client library for the Aligni PLM XML API
//!
//! Creates manufacturers, units, parts, revisions and BOM subparts in an
//! Aligni catalog and looks up existing records by name.
//!
//! ```no_run
//! use aligni::api::AligniClient;
//! use aligni::entities::NewPart;
//!
//! # fn main() -> aligni::api::Result<()> {
//! let mut client = AligniClient::new("my-token", "https://acme.aligni.com/api/v2/")?;
//! let part = client.create_part(&NewPart {
//!     partnumber: "R1-100".into(),
//!     manufacturer_pn: "RC0402FR-0710KL".into(),
//!     manufacturer: "Yageo".into(),
//!     part_type: "Resistor".into(),
//!     units: "Each".into(),
//!     revision: "A".into(),
//!     description: "10k resistor".into(),
//!     comment: "initial".into(),
//!     ..NewPart::default()
//! })?;
//! println!("created {}", part);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod entities;
