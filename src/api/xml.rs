//! Minimal XML element tree used for Aligni request and response bodies
//!
//! Requests are built as a tree of named text nodes and written with
//! `quick-xml`; responses are read back into the same tree so callers can
//! walk children by tag name.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

/// Errors from reading or writing an XML document
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML syntax error: {0}")]
    Syntax(String),

    #[error("unexpected closing tag </{0}>")]
    UnbalancedTag(String),

    #[error("document has no root element")]
    NoRoot,

    #[error("failed to write XML: {0}")]
    Write(String),
}

/// A named element with optional text and child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub text: Option<String>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Element whose text is `value` coerced to a string
    pub fn with_text(name: impl Into<String>, value: impl std::fmt::Display) -> Self {
        Self {
            name: name.into(),
            text: Some(value.to_string()),
            children: Vec::new(),
        }
    }

    /// Append a child element holding `value` as text
    pub fn push_text(&mut self, name: &str, value: impl std::fmt::Display) -> &mut Self {
        self.children.push(XmlNode::with_text(name, value));
        self
    }

    pub fn push(&mut self, child: XmlNode) -> &mut Self {
        self.children.push(child);
        self
    }

    /// First direct child with the given tag
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first direct child with the given tag (empty if the child has no text)
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_deref().unwrap_or(""))
    }

    /// Serialize as a UTF-8 document with an XML declaration
    pub fn to_bytes(&self) -> Result<Vec<u8>, XmlError> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| XmlError::Write(e.to_string()))?;
        write_node(&mut writer, self)?;
        Ok(writer.into_inner())
    }

    /// Parse a document into its root element
    pub fn parse(document: &str) -> Result<XmlNode, XmlError> {
        let mut reader = Reader::from_str(document);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| XmlError::Syntax(e.to_string()))?;

            match event {
                Event::Start(start) => {
                    stack.push(XmlNode::new(tag_name(&start)));
                }
                Event::Empty(start) => {
                    let node = XmlNode::new(tag_name(&start));
                    attach(&mut stack, &mut root, node);
                }
                Event::End(end) => {
                    let node = stack.pop().ok_or_else(|| {
                        XmlError::UnbalancedTag(String::from_utf8_lossy(end.name().as_ref()).into_owned())
                    })?;
                    attach(&mut stack, &mut root, node);
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| XmlError::Syntax(e.to_string()))?;
                    append_text(&mut stack, &text);
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    append_text(&mut stack, &text);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(XmlError::Syntax(format!("unclosed element <{}>", open.name)));
        }

        root.ok_or(XmlError::NoRoot)
    }
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> Result<(), XmlError> {
    writer
        .write_event(Event::Start(BytesStart::new(node.name.as_str())))
        .map_err(|e| XmlError::Write(e.to_string()))?;

    if let Some(ref text) = node.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| XmlError::Write(e.to_string()))?;
    }

    for child in &node.children {
        write_node(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(|e| XmlError::Write(e.to_string()))?;
    Ok(())
}

fn tag_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        // Only the first top-level element counts as the root
        None if root.is_none() => *root = Some(node),
        None => {}
    }
}

/// Whitespace-only chunks are indentation; anything else is kept verbatim
fn append_text(stack: &mut [XmlNode], text: &str) {
    if text.trim().is_empty() {
        return;
    }
    if let Some(current) = stack.last_mut() {
        current.text.get_or_insert_with(String::new).push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested_tree() {
        let mut root = XmlNode::new("unit");
        root.push_text("name", "Each");

        let bytes = root.to_bytes().unwrap();
        let xml = String::from_utf8(bytes).unwrap();
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8"?><unit><name>Each</name></unit>"#
        );
    }

    #[test]
    fn test_serialize_escapes_text() {
        let mut root = XmlNode::new("manufacturer");
        root.push_text("name", "Smith & Sons <Ltd>");

        let xml = String::from_utf8(root.to_bytes().unwrap()).unwrap();
        assert!(xml.contains("<name>Smith &amp; Sons &lt;Ltd&gt;</name>"));
    }

    #[test]
    fn test_parse_response_with_whitespace() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<part>
  <id>55</id>
  <revision>
    <id>2</id>
  </revision>
  <description/>
</part>"#;
        let root = XmlNode::parse(doc).unwrap();
        assert_eq!(root.name, "part");
        assert_eq!(root.child_text("id"), Some("55"));
        assert_eq!(
            root.child("revision").and_then(|r| r.child_text("id")),
            Some("2")
        );
        assert_eq!(root.child_text("description"), Some(""));
        assert_eq!(root.child_text("missing"), None);
    }

    #[test]
    fn test_parse_unescapes_entities() {
        let root = XmlNode::parse("<m><name>A &amp; B</name></m>").unwrap();
        assert_eq!(root.child_text("name"), Some("A & B"));
    }

    #[test]
    fn test_parse_keeps_text_exactly() {
        let root = XmlNode::parse("<part><id> 55 </id><name>A<!--c--> B</name></part>").unwrap();
        assert_eq!(root.child_text("id"), Some(" 55 "));
        assert_eq!(root.child_text("name"), Some("A B"));
    }

    #[test]
    fn test_parse_round_trips_built_document() {
        let mut root = XmlNode::new("subpart");
        root.push_text("quantity", 2.5).push_text("designator", "R1");
        let bytes = root.to_bytes().unwrap();

        let parsed = XmlNode::parse(std::str::from_utf8(&bytes).unwrap()).unwrap();
        assert_eq!(parsed, root);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(XmlNode::parse("bad xml").is_err());
        assert!(XmlNode::parse("").is_err());
        assert!(XmlNode::parse("<open><id>1</id>").is_err());
    }
}
