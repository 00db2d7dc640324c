//! Subpart entity type - a BOM line linking a parent revision to a child revision

use serde::Serialize;

/// A bill-of-materials line to create under a parent part revision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSubpart {
    /// Aligni id of the parent part
    pub parent_part_id: String,

    /// Aligni id of the parent part's revision
    pub parent_revision_id: String,

    /// Aligni id of the child part revision placed on the BOM
    pub subpart_revision_id: String,

    /// Manufacturer part number of the child
    pub manufacturer_pn: String,

    /// Internal part number of the child
    pub partnumber: String,

    /// How many of the child go into the parent
    pub quantity: f64,

    /// Schematic/reference designator (e.g. "R1, R2")
    pub designator: String,

    pub comment: String,
}
