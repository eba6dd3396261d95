//! Thin DOM layer over `html5ever`'s reference tree (`markup5ever_rcdom`).
//!
//! Contract:
//! - Parsing is error-recovering and never fails; malformed markup yields the
//!   recovered tree the HTML5 algorithm prescribes.
//! - Element names compare ASCII-case-insensitively; attribute names are
//!   lowercased by the parser and compared the same way.
//! - Queries and walks visit elements in document order (preorder).
//! - Serialization surfaces the writer's `std::io::Error` and nothing else.

use std::cell::RefCell;
use std::io;

use html5ever::parse_document;
use html5ever::serialize::{SerializeOpts, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::{Attribute, LocalName, ParseOpts, QualName, namespace_url, ns};
use markup5ever_rcdom::{NodeData, RcDom, SerializableHandle};

pub use markup5ever_rcdom::Handle;
pub use markup5ever_rcdom::Node;

mod node_utils;

pub use node_utils::{
    find_element, get_attr, has_attr, is_element_named, prepend_child, set_attr, walk_elements,
};

/// A parsed HTML document plus the URL it was retrieved from, if known.
pub struct Document {
    dom: RcDom,
    url: Option<String>,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self::new(html, None)
    }

    pub fn parse_with_url(html: &str, url: impl Into<String>) -> Self {
        Self::new(html, Some(url.into()))
    }

    fn new(html: &str, url: Option<String>) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        log::trace!(target: "dom", "parsed document ({} bytes)", html.len());
        Self { dom, url }
    }

    /// The URL this document was loaded from, verbatim as the caller gave it.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The document node; the starting point for queries and walks.
    pub fn root(&self) -> Handle {
        self.dom.document.clone()
    }

    pub fn to_html(&self) -> io::Result<String> {
        let mut bytes = Vec::new();
        let root: SerializableHandle = self.dom.document.clone().into();
        serialize(&mut bytes, &root, SerializeOpts::default())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Construct a detached HTML element with no attributes.
pub fn new_element(name: &str) -> Handle {
    Node::new(NodeData::Element {
        name: QualName::new(None, ns!(html), LocalName::from(name)),
        attrs: RefCell::new(Vec::new()),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

pub(crate) fn new_attribute(name: &str, value: &str) -> Attribute {
    Attribute {
        name: QualName::new(None, ns!(), LocalName::from(name)),
        value: value.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_builds_head_and_body() {
        let doc = Document::parse("<html><body>hello</body></html>");
        let head = find_element(&doc.root(), &["head"], None);
        let body = find_element(&doc.root(), &["body"], None);
        assert!(head.is_some());
        assert!(body.is_some());
    }

    #[test]
    fn url_is_kept_verbatim() {
        let doc = Document::parse_with_url("<p>x</p>", "https://example.com/a%20b");
        assert_eq!(doc.url(), Some("https://example.com/a%20b"));
        assert_eq!(Document::parse("<p>x</p>").url(), None);
    }

    #[test]
    fn serialize_round_trips_attributes() {
        let doc = Document::parse(r#"<html><body><a href="/x">link</a></body></html>"#);
        let html = doc.to_html().unwrap();
        assert!(html.contains(r#"<a href="/x">link</a>"#), "got: {html}");
    }

    #[test]
    fn constructed_base_serializes_as_void_element() {
        let doc = Document::parse("<html><head></head><body></body></html>");
        let head = find_element(&doc.root(), &["head"], None).unwrap();
        let base = new_element("base");
        set_attr(&base, "href", "https://example.com/");
        prepend_child(&head, base);
        let html = doc.to_html().unwrap();
        assert!(html.contains(r#"<base href="https://example.com/">"#), "got: {html}");
    }
}
