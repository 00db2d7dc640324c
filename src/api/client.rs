//! Aligni API client
//!
//! Every operation builds a small XML document, sends it to
//! `<url_base><api_token>/<resource>/` and reads the id (or the name → id
//! collection) back out of the response. Calls are paced by the client's
//! [`RateLimiter`] and never retried.

use tracing::{debug, info, warn};

use crate::api::error::{AligniError, Result};
use crate::api::rate_limit::{FixedInterval, RateLimiter};
use crate::api::resolver::{resolve_part_references, ReferenceResolver};
use crate::api::transport::{HttpResponse, HttpTransport, Transport};
use crate::api::xml::XmlNode;
use crate::entities::{NameIndex, NewPart, NewSubpart, Part, PartReferences, ReferenceKind};

/// Headers sent with every POST
const XML_HEADERS: &[(&str, &str)] = &[
    ("Content-Type", "application/xml"),
    ("Accept", "application/xml"),
];

/// Client for one Aligni account
///
/// Operations take `&mut self`: pacing is only meaningful when calls are
/// issued one at a time, so share a client behind a `Mutex` if needed.
pub struct AligniClient<T: Transport = HttpTransport> {
    api_token: String,
    url_base: String,
    transport: T,
    limiter: Box<dyn RateLimiter>,
}

impl AligniClient<HttpTransport> {
    /// Client over a default HTTP transport, paced at [`crate::api::RATE_LIMIT_SECS`]
    pub fn new(api_token: impl Into<String>, url_base: impl Into<String>) -> Result<Self> {
        Ok(Self::with_transport(api_token, url_base, HttpTransport::new()?))
    }
}

impl<T: Transport> AligniClient<T> {
    pub fn with_transport(
        api_token: impl Into<String>,
        url_base: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            url_base: url_base.into(),
            transport,
            limiter: Box::new(FixedInterval::default()),
        }
    }

    /// Replace the pacing gate
    pub fn with_rate_limiter(mut self, limiter: impl RateLimiter + 'static) -> Self {
        self.limiter = Box::new(limiter);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ---- creating operations ----

    /// Create a part and its first revision
    ///
    /// The manufacturer, part type and unit are looked up by name and
    /// created first when Aligni does not know them yet.
    pub fn create_part(&mut self, part: &NewPart) -> Result<Part> {
        let refs = resolve_part_references(self, part)?;
        self.create_part_resolved(part, &refs)
    }

    /// Create a part whose references are already resolved to Aligni ids
    pub fn create_part_resolved(&mut self, part: &NewPart, refs: &PartReferences) -> Result<Part> {
        let document = part_document(part, refs);
        let root = self.post("part", &document)?;

        let part_id = root
            .child_text("id")
            .ok_or_else(|| AligniError::malformed("part", "missing <id>"))?;
        let revision_id = root
            .child("revision")
            .and_then(|rev| rev.child_text("id"))
            .ok_or_else(|| AligniError::malformed("part", "missing <revision><id>"))?;

        let created = Part {
            part_id: part_id.to_string(),
            revision_id: revision_id.to_string(),
        };
        info!(
            partnumber = %part.partnumber,
            part_id = %created.part_id,
            revision_id = %created.revision_id,
            "created part"
        );
        Ok(created)
    }

    /// Add a BOM line under a parent part revision
    pub fn create_subpart(&mut self, subpart: &NewSubpart) -> Result<()> {
        let document = subpart_document(subpart);
        self.send("subpart", &document)?;
        info!(
            parent_part_id = %subpart.parent_part_id,
            subpart_revision_id = %subpart.subpart_revision_id,
            quantity = subpart.quantity,
            "created subpart"
        );
        Ok(())
    }

    /// Create a manufacturer, returning its new id
    pub fn create_manufacturer(&mut self, name: &str) -> Result<String> {
        self.create_reference(ReferenceKind::Manufacturer, name)
    }

    /// Create a unit, returning its new id
    pub fn create_unit(&mut self, name: &str) -> Result<String> {
        self.create_reference(ReferenceKind::Unit, name)
    }

    /// Create a (material) part type, returning its new id
    pub(crate) fn create_part_type(&mut self, name: &str) -> Result<String> {
        self.create_reference(ReferenceKind::PartType, name)
    }

    // ---- list operations ----

    /// Manufacturers keyed by name
    pub fn get_manufacturer_list(&mut self) -> Result<NameIndex> {
        self.get_references(ReferenceKind::Manufacturer)
    }

    /// Parts keyed by manufacturer part number
    pub fn get_parts_list(&mut self) -> Result<NameIndex> {
        self.list("part", "manufacturer_pn")
    }

    /// Part types keyed by name
    pub fn get_part_types(&mut self) -> Result<NameIndex> {
        self.get_references(ReferenceKind::PartType)
    }

    /// Units keyed by name
    pub fn get_units(&mut self) -> Result<NameIndex> {
        self.get_references(ReferenceKind::Unit)
    }

    /// Name index for one kind of reference entity
    pub fn get_references(&mut self, kind: ReferenceKind) -> Result<NameIndex> {
        self.list(kind.resource(), "name")
    }

    // ---- private helpers ----

    /// Create a manufacturer, part type or unit from its name
    fn create_reference(&mut self, kind: ReferenceKind, name: &str) -> Result<String> {
        let resource = kind.resource();
        let mut document = XmlNode::new(resource);
        document.push_text("name", name);
        if kind == ReferenceKind::PartType {
            document.push_text("is_non_material", false);
        }
        self.create_named(resource, &document, name)
    }

    fn create_named(&mut self, resource: &str, document: &XmlNode, name: &str) -> Result<String> {
        let root = self.post(resource, document)?;
        let id = entity_id(&root)
            .ok_or_else(|| AligniError::malformed(resource, "missing <id>"))?
            .to_string();
        info!(resource, name, id = %id, "created {}", resource);
        Ok(id)
    }

    fn list(&mut self, resource: &str, key_field: &str) -> Result<NameIndex> {
        let url = format!("{}{}/{}", self.url_base, self.api_token, resource);
        debug!(resource, url = %self.redact(&url), "GET");

        self.limiter.acquire();
        let response = self.transport.get(&url)?;
        let body = check_status(resource, response)?;
        let root = parse_document(resource, &body)?;

        let index = name_index(&root, key_field);
        debug!(resource, entries = index.len(), "listed {}", resource);
        Ok(index)
    }

    /// POST and parse the response document
    fn post(&mut self, resource: &str, document: &XmlNode) -> Result<XmlNode> {
        let body = self.send(resource, document)?;
        parse_document(resource, &body)
    }

    /// POST and return the raw response body of a successful call
    fn send(&mut self, resource: &str, document: &XmlNode) -> Result<String> {
        let payload = document.to_bytes().map_err(|source| AligniError::Request {
            resource: resource.to_string(),
            source,
        })?;
        let url = format!("{}{}/{}/", self.url_base, self.api_token, resource);
        debug!(resource, url = %self.redact(&url), bytes = payload.len(), "POST");

        self.limiter.acquire();
        let response = self.transport.post(&url, XML_HEADERS, payload)?;
        check_status(resource, response)
    }

    fn redact(&self, url: &str) -> String {
        if self.api_token.is_empty() {
            url.to_string()
        } else {
            url.replace(&self.api_token, "***")
        }
    }
}

impl<T: Transport> ReferenceResolver for AligniClient<T> {
    fn resolve_or_create(&mut self, kind: ReferenceKind, name: &str) -> Result<String> {
        let index = self.get_references(kind)?;
        if let Some(id) = index.get(name) {
            debug!(kind = %kind, name, id = %id, "resolved reference");
            return Ok(id.clone());
        }

        info!(kind = %kind, name, "{} not found in Aligni, creating it", kind);
        match kind {
            ReferenceKind::Manufacturer => self.create_manufacturer(name),
            ReferenceKind::PartType => self.create_part_type(name),
            ReferenceKind::Unit => self.create_unit(name),
        }
    }
}

/// Request body for a new part and its first revision
pub fn part_document(part: &NewPart, refs: &PartReferences) -> XmlNode {
    let mut root = XmlNode::new("part");
    root.push_text("partnumber", &part.partnumber)
        .push_text("manufacturer_pn", &part.manufacturer_pn)
        .push_text("manufacturer_id", &refs.manufacturer_id)
        .push_text("parttype_id", &refs.parttype_id)
        .push_text("unit_id", &refs.unit_id);

    let mut revision = XmlNode::new("revision");
    revision
        .push_text("revision_name", &part.revision)
        .push_text("description", &part.description)
        .push_text("comment", &part.comment);
    root.push(revision);

    if !part.alternates.is_empty() {
        let mut alternates = XmlNode::new("alternate_parts");
        for alternate in &part.alternates {
            let mut entry = XmlNode::new("alternate_part");
            entry.push_text("part_id", &alternate.part_id);
            if let Some(ref comment) = alternate.comment {
                entry.push_text("comment", comment);
            }
            if let Some(quality) = alternate.quality {
                entry.push_text("quality", quality);
            }
            alternates.push(entry);
        }
        root.push(alternates);
    }

    root
}

/// Request body for a new BOM line
pub fn subpart_document(subpart: &NewSubpart) -> XmlNode {
    let mut root = XmlNode::new("subpart");
    root.push_text("part_id", &subpart.parent_part_id)
        .push_text("part_revision_id", &subpart.parent_revision_id)
        .push_text("subpart_part_revision_id", &subpart.subpart_revision_id)
        .push_text("manufacturer_pn", &subpart.manufacturer_pn)
        .push_text("partnumber", &subpart.partnumber)
        .push_text("quantity", subpart.quantity)
        .push_text("designator", &subpart.designator)
        .push_text("comment", &subpart.comment);
    root
}

/// Map HTTP status codes onto the error taxonomy, returning the body on success
fn check_status(resource: &str, response: HttpResponse) -> Result<String> {
    match response.status {
        400 => {
            warn!(resource, body = %response.body, "Aligni rejected request");
            Err(AligniError::BadRequest {
                body: response.body,
            })
        }
        429 => {
            warn!(resource, "Aligni rate limit exceeded");
            Err(AligniError::RateLimited)
        }
        status if !(200..300).contains(&status) => {
            warn!(resource, status, "unexpected Aligni response status");
            Err(AligniError::UnexpectedStatus {
                status,
                body: response.body,
            })
        }
        _ => Ok(response.body),
    }
}

fn parse_document(resource: &str, body: &str) -> Result<XmlNode> {
    XmlNode::parse(body).map_err(|e| AligniError::malformed(resource, e.to_string()))
}

/// The entity id: a direct `<id>` child, or else the first one nested a level deeper
fn entity_id(root: &XmlNode) -> Option<&str> {
    root.child_text("id")
        .or_else(|| root.children.iter().find_map(|c| c.child_text("id")))
}

/// Collect `key_field → id` for every entity element, skipping blank keys
fn name_index(root: &XmlNode, key_field: &str) -> NameIndex {
    let mut index = NameIndex::new();
    for entity in &root.children {
        let name = entity.child_text(key_field).unwrap_or("");
        let id = entity.child_text("id").unwrap_or("");
        if !name.is_empty() {
            index.insert(name.to_string(), id.to_string());
        }
    }
    index
}
