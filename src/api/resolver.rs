//! Resolve-or-create for the references a part points at
//!
//! Aligni parts refer to their manufacturer, part type and unit by id. The
//! caller only knows names, so each name is looked up in the full remote
//! listing and created when absent.

use crate::api::error::Result;
use crate::entities::{NewPart, PartReferences, ReferenceKind};

/// Turns a reference name into an Aligni id, creating the entity if needed
pub trait ReferenceResolver {
    fn resolve_or_create(&mut self, kind: ReferenceKind, name: &str) -> Result<String>;
}

/// Resolve manufacturer, part type and unit (in that order) for a new part
pub fn resolve_part_references<R>(resolver: &mut R, part: &NewPart) -> Result<PartReferences>
where
    R: ReferenceResolver + ?Sized,
{
    let manufacturer_id = resolver.resolve_or_create(ReferenceKind::Manufacturer, &part.manufacturer)?;
    let parttype_id = resolver.resolve_or_create(ReferenceKind::PartType, &part.part_type)?;
    let unit_id = resolver.resolve_or_create(ReferenceKind::Unit, &part.units)?;

    Ok(PartReferences {
        manufacturer_id,
        parttype_id,
        unit_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::AligniError;
    use std::collections::HashMap;

    /// In-memory resolver that records lookups and hands out sequential ids
    #[derive(Default)]
    struct FakeResolver {
        known: HashMap<(ReferenceKind, String), String>,
        created: Vec<(ReferenceKind, String)>,
        lookups: Vec<ReferenceKind>,
        next_id: u32,
    }

    impl ReferenceResolver for FakeResolver {
        fn resolve_or_create(&mut self, kind: ReferenceKind, name: &str) -> Result<String> {
            self.lookups.push(kind);
            if let Some(id) = self.known.get(&(kind, name.to_string())) {
                return Ok(id.clone());
            }
            self.next_id += 1;
            let id = format!("new-{}", self.next_id);
            self.created.push((kind, name.to_string()));
            self.known.insert((kind, name.to_string()), id.clone());
            Ok(id)
        }
    }

    struct FailingResolver;

    impl ReferenceResolver for FailingResolver {
        fn resolve_or_create(&mut self, _kind: ReferenceKind, _name: &str) -> Result<String> {
            Err(AligniError::RateLimited)
        }
    }

    fn part() -> NewPart {
        NewPart {
            partnumber: "C1-200".to_string(),
            manufacturer_pn: "GRM155".to_string(),
            manufacturer: "Murata".to_string(),
            part_type: "Capacitor".to_string(),
            units: "Each".to_string(),
            revision: "A".to_string(),
            ..NewPart::default()
        }
    }

    #[test]
    fn test_resolves_in_order() {
        let mut resolver = FakeResolver::default();
        resolver.known.insert(
            (ReferenceKind::Manufacturer, "Murata".to_string()),
            "3".to_string(),
        );
        resolver
            .known
            .insert((ReferenceKind::Unit, "Each".to_string()), "1".to_string());

        let refs = resolve_part_references(&mut resolver, &part()).unwrap();

        assert_eq!(
            resolver.lookups,
            vec![
                ReferenceKind::Manufacturer,
                ReferenceKind::PartType,
                ReferenceKind::Unit
            ]
        );
        assert_eq!(refs.manufacturer_id, "3");
        assert_eq!(refs.parttype_id, "new-1");
        assert_eq!(refs.unit_id, "1");
        assert_eq!(
            resolver.created,
            vec![(ReferenceKind::PartType, "Capacitor".to_string())]
        );
    }

    #[test]
    fn test_failure_stops_resolution() {
        let result = resolve_part_references(&mut FailingResolver, &part());
        assert!(matches!(result, Err(AligniError::RateLimited)));
    }
}
