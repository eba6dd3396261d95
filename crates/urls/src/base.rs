//! The document's `<base href>` declaration.

use dom::Document;

/// Trimmed `href` of the first `<base>` element carrying one, if any.
pub(crate) fn base_href(doc: &Document) -> Option<String> {
    let base = dom::find_element(&doc.root(), &["base"], Some("href"))?;
    dom::get_attr(&base, "href").map(|href| href.trim().to_string())
}

/// Set the `<base>` element's `href`, creating `<base>` (and `<head>`) on
/// demand. An existing `<base>` keeps its position and its other attributes.
pub(crate) fn set_base_href(doc: &Document, url: &str) -> String {
    match dom::find_element(&doc.root(), &["base"], None) {
        Some(base) => dom::set_attr(&base, "href", url),
        None => {
            let base = dom::new_element("base");
            dom::set_attr(&base, "href", url);
            dom::prepend_child(&metadata_container(doc), base);
        }
    }
    url.to_string()
}

/// The document's `<head>`, created as the root element's first child (before
/// any `<body>`) when missing.
fn metadata_container(doc: &Document) -> dom::Handle {
    if let Some(head) = dom::find_element(&doc.root(), &["head"], None) {
        return head;
    }
    let head = dom::new_element("head");
    let parent = dom::find_element(&doc.root(), &["html"], None).unwrap_or_else(|| doc.root());
    dom::prepend_child(&parent, head.clone());
    head
}
