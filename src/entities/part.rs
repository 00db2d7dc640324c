//! Part entity type - catalog items and their revisions

use serde::Serialize;

/// A part created in Aligni, identified by its part id and initial revision id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Part {
    pub part_id: String,
    pub revision_id: String,
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (revision {})", self.part_id, self.revision_id)
    }
}

/// An alternate (substitute) part listed on a new part
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternatePart {
    /// Aligni id of the alternate part
    pub part_id: String,

    /// Free-form note about the substitution
    pub comment: Option<String>,

    /// Substitution quality rating
    pub quality: Option<u32>,
}

impl AlternatePart {
    /// An alternate with no comment or quality
    pub fn new(part_id: impl Into<String>) -> Self {
        Self {
            part_id: part_id.into(),
            comment: None,
            quality: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = Some(quality);
        self
    }
}

impl std::str::FromStr for AlternatePart {
    type Err = String;

    /// Parses `ID[:QUALITY[:COMMENT]]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.splitn(3, ':');
        let part_id = fields.next().unwrap_or_default().trim();
        if part_id.is_empty() {
            return Err(format!(
                "Invalid alternate part '{}'. Use ID[:QUALITY[:COMMENT]]",
                s
            ));
        }

        let mut alternate = AlternatePart::new(part_id);

        if let Some(quality) = fields.next().map(str::trim).filter(|q| !q.is_empty()) {
            let quality = quality
                .parse::<u32>()
                .map_err(|_| format!("Invalid alternate part quality '{}' in '{}'", quality, s))?;
            alternate.quality = Some(quality);
        }

        if let Some(comment) = fields.next().filter(|c| !c.is_empty()) {
            alternate.comment = Some(comment.to_string());
        }

        Ok(alternate)
    }
}

/// A part to create, described by reference names rather than remote ids
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewPart {
    /// Internal part number
    pub partnumber: String,

    /// Manufacturer part number
    pub manufacturer_pn: String,

    /// Manufacturer name, resolved (or created) remotely
    pub manufacturer: String,

    /// Part type name, resolved (or created) remotely
    pub part_type: String,

    /// Unit name, resolved (or created) remotely
    pub units: String,

    /// Name of the initial revision
    pub revision: String,

    pub description: String,

    pub comment: String,

    /// Alternate parts; empty unless the caller adds some
    pub alternates: Vec<AlternatePart>,
}

impl NewPart {
    pub fn with_alternate(mut self, alternate: AlternatePart) -> Self {
        self.alternates.push(alternate);
        self
    }

    /// Add plain alternates by id, with no comment or quality
    pub fn with_alternate_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternates
            .extend(ids.into_iter().map(AlternatePart::new));
        self
    }
}

/// Remote ids a part-creation request refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartReferences {
    pub manufacturer_id: String,
    pub parttype_id: String,
    pub unit_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternate_from_str_id_only() {
        let alt: AlternatePart = "42".parse().unwrap();
        assert_eq!(alt, AlternatePart::new("42"));
    }

    #[test]
    fn test_alternate_from_str_full() {
        let alt: AlternatePart = "42:80:second source: cheaper".parse().unwrap();
        assert_eq!(alt.part_id, "42");
        assert_eq!(alt.quality, Some(80));
        assert_eq!(alt.comment.as_deref(), Some("second source: cheaper"));
    }

    #[test]
    fn test_alternate_from_str_rejects_bad_quality() {
        assert!("42:high".parse::<AlternatePart>().is_err());
        assert!("".parse::<AlternatePart>().is_err());
    }

    #[test]
    fn test_default_alternates_not_shared() {
        let first = NewPart::default().with_alternate_ids(["1", "2"]);
        let second = NewPart::default();
        assert_eq!(first.alternates.len(), 2);
        assert!(second.alternates.is_empty());
    }

    #[test]
    fn test_part_display() {
        let part = Part {
            part_id: "55".to_string(),
            revision_id: "2".to_string(),
        };
        assert_eq!(part.to_string(), "55 (revision 2)");
    }
}
