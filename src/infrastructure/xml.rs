//! XML document tree backed by quick-xml

use crate::domain::DocumentNode;
use crate::error::{PlanError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// An element with its name, concatenated text and child elements.
///
/// Attributes are not kept; plan documents carry everything as element text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    text: String,
    elements: Vec<XmlElement>,
}

impl XmlElement {
    fn new(name: String) -> Self {
        XmlElement {
            name,
            text: String::new(),
            elements: Vec::new(),
        }
    }

    /// Read and parse an XML file into its root element.
    ///
    /// Files are read as UTF-8 unless the XML declaration names Latin-1.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = decode_document(fs::read(path)?)?;
        Self::parse(&content)
    }

    /// Parse XML content into its root element
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        reader.trim_text(true);

        let mut open: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    open.push(XmlElement::new(name));
                }
                Ok(Event::Empty(ref e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    attach(&mut open, &mut root, XmlElement::new(name))?;
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|e| {
                        PlanError::Xml(format!("Failed to unescape text: {}", e))
                    })?;
                    if let Some(current) = open.last_mut() {
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(current) = open.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::End(_)) => {
                    let element = open.pop().ok_or_else(|| {
                        PlanError::Xml("Closing tag without matching opening tag".to_string())
                    })?;
                    attach(&mut open, &mut root, element)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(PlanError::Xml(format!(
                        "XML parsing error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(unclosed) = open.last() {
            return Err(PlanError::Xml(format!(
                "Unexpected end of document: <{}> is not closed",
                unclosed.name
            )));
        }

        root.ok_or_else(|| PlanError::Xml("Document has no root element".to_string()))
    }
}

/// Add a finished element to its parent, or make it the root
fn attach(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    match open.last_mut() {
        Some(parent) => parent.elements.push(element),
        None if root.is_some() => {
            return Err(PlanError::Xml(format!(
                "Multiple root elements: unexpected <{}>",
                element.name
            )));
        }
        None => *root = Some(element),
    }
    Ok(())
}

impl DocumentNode for XmlElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn children(&self, name: &str) -> Vec<&Self> {
        self.elements.iter().filter(|e| e.name == name).collect()
    }
}

/// Encoding labels read as ISO-8859-1
const LATIN1_LABELS: &[&str] = &["ISO-8859-1", "ISO_8859-1", "latin1", "l1"];

fn decode_document(bytes: Vec<u8>) -> Result<String> {
    let bytes = match String::from_utf8(bytes) {
        Ok(content) => return Ok(content),
        Err(e) => e.into_bytes(),
    };

    match declared_encoding(&bytes) {
        Some(label) if LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(&label)) => {
            tracing::debug!(encoding = %label, "Decoding document as Latin-1");
            // Latin-1 bytes map one to one onto the first 256 code points
            Ok(bytes.iter().map(|&b| char::from(b)).collect())
        }
        Some(label) => Err(PlanError::Xml(format!(
            "Unsupported document encoding '{}'",
            label
        ))),
        None => Err(PlanError::Xml(
            "Document is not valid UTF-8 and declares no other encoding".to_string(),
        )),
    }
}

/// `encoding` value of the leading XML declaration, if any
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    if let Ok(Event::Decl(decl)) = reader.read_event_into(&mut buf) {
        if let Some(Ok(value)) = decl.encoding() {
            return Some(String::from_utf8_lossy(&value).into_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_nested_elements() {
        let root = XmlElement::parse(
            r#"<?xml version="1.0"?>
            <data>
                <name>Spring</name>
                <records>
                    <record><title>One</title></record>
                    <record><title>Two</title></record>
                </records>
            </data>"#,
        )
        .unwrap();

        assert_eq!(root.name(), "data");
        assert_eq!(root.child("name").unwrap().text(), "Spring");

        let records = root.child("records").unwrap().children("record");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].child("title").unwrap().text(), "One");
        assert_eq!(records[1].child("title").unwrap().text(), "Two");
    }

    #[test]
    fn test_children_are_direct_only() {
        let root = XmlElement::parse("<a><b><c>deep</c></b></a>").unwrap();
        assert!(root.child("c").is_none());
        assert_eq!(root.child("b").unwrap().child("c").unwrap().text(), "deep");
    }

    #[test]
    fn test_empty_and_self_closing_elements() {
        let root = XmlElement::parse("<r><emphasis/><session></session></r>").unwrap();
        assert_eq!(root.child("emphasis").unwrap().text(), "");
        assert_eq!(root.child("session").unwrap().text(), "");
    }

    #[test]
    fn test_entities_and_cdata() {
        let root =
            XmlElement::parse("<r><t>Hills &amp; drills</t><n><![CDATA[<b>raw</b>]]></n></r>")
                .unwrap();
        assert_eq!(root.child("t").unwrap().text(), "Hills & drills");
        assert_eq!(root.child("n").unwrap().text(), "<b>raw</b>");
    }

    #[test]
    fn test_mismatched_tags_fail() {
        let err = XmlElement::parse("<a><b></a>").unwrap_err();
        assert!(matches!(err, PlanError::Xml(_)));
    }

    #[test]
    fn test_unclosed_document_fails() {
        let err = XmlElement::parse("<a><b>text</b>").unwrap_err();
        assert!(matches!(err, PlanError::Xml(_)));
    }

    #[test]
    fn test_empty_document_fails() {
        assert!(matches!(
            XmlElement::parse("   "),
            Err(PlanError::Xml(_))
        ));
    }

    #[test]
    fn test_multiple_roots_fail() {
        assert!(matches!(
            XmlElement::parse("<a/><b/>"),
            Err(PlanError::Xml(_))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plan.xml");
        fs::write(&path, "<data><name>File plan</name></data>").unwrap();

        let root = XmlElement::load_from_path(&path).unwrap();
        assert_eq!(root.child("name").unwrap().text(), "File plan");
    }

    #[test]
    fn test_load_latin1_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plan.xml");
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<data><name>Caf".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b" runs</name></data>");
        fs::write(&path, bytes).unwrap();

        let root = XmlElement::load_from_path(&path).unwrap();
        assert_eq!(root.child("name").unwrap().text(), "Caf\u{e9} runs");
    }

    #[test]
    fn test_load_undeclared_non_utf8_is_xml_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plan.xml");
        fs::write(&path, b"<data><name>Caf\xE9</name></data>").unwrap();

        match XmlElement::load_from_path(&path) {
            Err(PlanError::Xml(msg)) => assert!(msg.contains("not valid UTF-8")),
            other => panic!("Expected Xml error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_unsupported_encoding_is_xml_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plan.xml");
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"Shift_JIS\"?><data>".to_vec();
        bytes.extend_from_slice(&[0x82, 0xA0]);
        bytes.extend_from_slice(b"</data>");
        fs::write(&path, bytes).unwrap();

        match XmlElement::load_from_path(&path) {
            Err(PlanError::Xml(msg)) => assert!(msg.contains("Shift_JIS")),
            other => panic!("Expected Xml error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = XmlElement::load_from_path(&temp.path().join("missing.xml"));
        assert!(matches!(result, Err(PlanError::Io(_))));
    }
}
