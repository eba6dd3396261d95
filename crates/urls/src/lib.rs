//! Base-URL handling and relative-URL absolutization for parsed HTML
//! documents.
//!
//! Everything hangs off [`DocumentUrls`], an extension trait for
//! [`dom::Document`]: read or write the `<base href>` declaration, resolve a
//! single URL against the document's effective base, or sweep the whole tree
//! and rewrite every URL-bearing attribute to its absolute form.
//!
//! ```
//! use dom::Document;
//! use urls::DocumentUrls;
//!
//! let doc = Document::parse_with_url(
//!     r#"<html><body><img src="logo.png"></body></html>"#,
//!     "https://example.com/articles/",
//! );
//! doc.resolve_all_relative_urls();
//! assert!(doc.to_html().unwrap().contains("https://example.com/articles/logo.png"));
//! ```

mod base;
mod resolve;
mod rewrite;
mod srcset;
mod tables;

use dom::Document;

use crate::resolve::UrlResolver;

/// URL operations over a parsed document.
pub trait DocumentUrls {
    /// The `<base>` element's trimmed `href` value, if one exists.
    fn base_href(&self) -> Option<String>;

    /// Set (or create) the `<base>` element's `href`; returns the stored
    /// value.
    fn set_base_href(&self, url: &str) -> String;

    /// Resolve one possibly-relative URL against the document URL and any
    /// `<base href>`. Malformed input comes back trimmed, never an error.
    fn resolve_relative_url(&self, url: &str) -> String;

    /// Rewrite every known URL-bearing attribute in the document to its
    /// resolved absolute form. Returns `self` for chaining.
    fn resolve_all_relative_urls(&self) -> &Self;
}

impl DocumentUrls for Document {
    fn base_href(&self) -> Option<String> {
        base::base_href(self)
    }

    fn set_base_href(&self, url: &str) -> String {
        base::set_base_href(self, url)
    }

    fn resolve_relative_url(&self, url: &str) -> String {
        UrlResolver::for_document(self).resolve(url)
    }

    fn resolve_all_relative_urls(&self) -> &Self {
        rewrite::resolve_all(self);
        self
    }
}
