//! Owned XML element tree built from `quick-xml` events.
//!
//! The readers in this crate consume a plain tree: tag name, attribute
//! lookup by name, child lookup and iteration, and the element's own text.
//! Whitespace-only text nodes are dropped (indentation), non-whitespace
//! text is preserved verbatim since `<data>` payloads and property bodies
//! carry meaning in their raw text.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tmx_core::{Error, Result};

/// A single parsed XML element.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Returns the element's tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a required attribute by name.
    ///
    /// # Errors
    /// [`Error::MissingAttribute`] when the attribute is absent.
    pub fn attribute(&self, name: &str) -> Result<&str> {
        self.opt_attribute(name)
            .ok_or_else(|| Error::MissingAttribute {
                name: name.to_string(),
            })
    }

    /// Looks up an optional attribute by name.
    #[must_use]
    pub fn opt_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the element's own text value.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterates over the child elements with the given tag.
    pub fn children<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == tag)
    }

    /// Iterates over all child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// Looks up a required single child by tag.
    ///
    /// # Errors
    /// [`Error::InvalidElement`] when no such child exists.
    pub fn child(&self, tag: &str) -> Result<&Element> {
        self.opt_child(tag).ok_or_else(|| Error::InvalidElement {
            tag: tag.to_string(),
        })
    }

    /// Looks up an optional single child by tag.
    #[must_use]
    pub fn opt_child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == tag)
    }
}

/// A parsed XML document owning its element tree.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parses a document from its full text.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader
                .read_event_into(&mut buf)
                .map_err(|e| Error::Xml(e.to_string()))?
            {
                Event::Start(start) => {
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = element_from_start(&start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::Xml("unbalanced end tag".to_string()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text.decode().map_err(|e| Error::Xml(e.to_string()))?;
                    if !text.trim().is_empty()
                        && let Some(parent) = stack.last_mut()
                    {
                        parent.text.push_str(&text);
                    }
                }
                Event::CData(cdata) => {
                    let text = cdata.decode().map_err(|e| Error::Xml(e.to_string()))?;
                    if !text.trim().is_empty()
                        && let Some(parent) = stack.last_mut()
                    {
                        parent.text.push_str(&text);
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions.
                _ => {}
            }
            buf.clear();
        }

        let root = root.ok_or_else(|| Error::Xml("document has no root element".to_string()))?;
        Ok(Self { root })
    }

    /// Loads and parses the document at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    /// Returns the document's root element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| Error::Xml(e.to_string()))?
        .to_string();

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| Error::Xml(e.to_string()))?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|e| Error::Xml(e.to_string()))?
            .to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| Error::Xml(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(Error::Xml("multiple root elements".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree_shape() {
        let doc = Document::parse(
            r#"<map version="1.0"><layer name="ground"><data encoding="csv">1,2</data></layer></map>"#,
        )
        .unwrap();

        let map = doc.root();
        assert_eq!(map.name(), "map");
        assert_eq!(map.attribute("version").unwrap(), "1.0");

        let layer = map.child("layer").unwrap();
        assert_eq!(layer.opt_attribute("name"), Some("ground"));
        assert_eq!(layer.child("data").unwrap().text(), "1,2");
    }

    #[test]
    fn test_missing_attribute_and_child() {
        let doc = Document::parse("<map><layer/></map>").unwrap();

        assert!(matches!(
            doc.root().attribute("version"),
            Err(Error::MissingAttribute { .. })
        ));
        assert!(matches!(
            doc.root().child("tileset"),
            Err(Error::InvalidElement { .. })
        ));
    }

    #[test]
    fn test_whitespace_only_text_is_dropped() {
        let doc = Document::parse("<map>\n  <layer>\n  </layer>\n</map>").unwrap();
        assert_eq!(doc.root().text(), "");
        assert_eq!(doc.root().child("layer").unwrap().text(), "");
    }
}
