//! Reference entities - manufacturers, part types and units a part points at by id

use std::collections::BTreeMap;

/// Name → remote id mapping returned by the list endpoints
pub type NameIndex = BTreeMap<String, String>;

/// Lookup entity kinds a part references by remote id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Manufacturer,
    PartType,
    Unit,
}

impl ReferenceKind {
    /// Resource path segment (and request root element) for this kind
    pub fn resource(&self) -> &'static str {
        match self {
            ReferenceKind::Manufacturer => "manufacturer",
            ReferenceKind::PartType => "parttype",
            ReferenceKind::Unit => "unit",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Manufacturer => write!(f, "manufacturer"),
            ReferenceKind::PartType => write!(f, "part type"),
            ReferenceKind::Unit => write!(f, "unit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_segments() {
        assert_eq!(ReferenceKind::Manufacturer.resource(), "manufacturer");
        assert_eq!(ReferenceKind::PartType.resource(), "parttype");
        assert_eq!(ReferenceKind::Unit.resource(), "unit");
    }

    #[test]
    fn test_display() {
        assert_eq!(ReferenceKind::PartType.to_string(), "part type");
    }
}
