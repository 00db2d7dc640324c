//! Plain records exchanged with the Aligni API

pub mod part;
pub mod reference;
pub mod subpart;

pub use part::{AlternatePart, NewPart, Part, PartReferences};
pub use reference::{NameIndex, ReferenceKind};
pub use subpart::NewSubpart;
