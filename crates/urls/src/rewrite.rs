//! The document-wide rewrite sweep.
//!
//! One pass per table entry, elements visited in document order. A value that
//! cannot be resolved is left in place (trimmed), and never stops the sweep.

use dom::Document;

use crate::resolve::UrlResolver;
use crate::tables::{SRCSET_ATTRIBUTES, URL_ATTRIBUTES};
use crate::srcset;

pub(crate) fn resolve_all(doc: &Document) {
    let resolver = UrlResolver::for_document(doc);

    for (attribute, names) in URL_ATTRIBUTES {
        rewrite_matching(doc, names, attribute, |value| {
            resolver.resolve(value.trim())
        });
    }

    for (attribute, names) in SRCSET_ATTRIBUTES {
        rewrite_matching(doc, names, attribute, |value| {
            srcset::resolve_candidates(value, &resolver)
        });
    }
}

fn rewrite_matching(doc: &Document, names: &[&str], attribute: &str, f: impl Fn(&str) -> String) {
    dom::walk_elements(&doc.root(), &mut |node| {
        if !names.iter().any(|name| dom::is_element_named(node, name)) {
            return;
        }
        if let Some(value) = dom::get_attr(node, attribute) {
            dom::set_attr(node, attribute, &f(&value));
        }
    });
}
