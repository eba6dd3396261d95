//! Relative-to-absolute URL resolution against a document's effective base.
//!
//! Contract:
//! - The effective base is `document URL` joined with the `<base href>` value,
//!   in that order; absent or empty components are skipped.
//! - An already-absolute candidate comes back in normalized form.
//! - An empty candidate resolves to the effective base itself.
//! - Anything that fails to parse or join comes back whitespace-trimmed and
//!   otherwise untouched; resolution never fails and never panics.
//! - Output is percent-unescaped back to its literal form, so non-ASCII path
//!   segments survive resolution unchanged.

use percent_encoding::percent_decode_str;
use url::Url;

use dom::Document;

use crate::base::base_href;

const LOG_TARGET: &str = "urls.resolve";

/// Resolution state for one document: the effective base, computed eagerly.
pub(crate) struct UrlResolver {
    base: Option<Url>,
}

impl UrlResolver {
    pub(crate) fn for_document(doc: &Document) -> Self {
        let doc_url = doc
            .url()
            .map(normalize_document_url)
            .filter(|u| !u.is_empty());
        let base_href = base_href(doc).filter(|h| !h.is_empty());

        let mut base: Option<Url> = None;
        for part in [doc_url, base_href].into_iter().flatten() {
            base = match base {
                None => Url::parse(&part).ok(),
                Some(prev) => prev.join(&part).ok(),
            };
            if base.is_none() {
                log::debug!(target: LOG_TARGET, "unusable base component {part:?}");
                break;
            }
        }

        Self { base }
    }

    pub(crate) fn resolve(&self, candidate: &str) -> String {
        let candidate = candidate.trim();
        match Url::parse(candidate) {
            Ok(absolute) => unescape(absolute.as_str()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let Some(base) = &self.base else {
                    return candidate.to_string();
                };
                match base.join(candidate) {
                    Ok(joined) => unescape(joined.as_str()),
                    Err(err) => {
                        log::debug!(target: LOG_TARGET, "cannot join {candidate:?}: {err}");
                        candidate.to_string()
                    }
                }
            }
            Err(err) => {
                log::debug!(target: LOG_TARGET, "unparseable candidate {candidate:?}: {err}");
                candidate.to_string()
            }
        }
    }
}

/// Hosts that over-escape non-ASCII document URLs hand back strings like
/// `https%3A//%25E2%2598%25A0.example`; two UTF-8-gated decodes recover the
/// literal form. A URL with no percent escapes passes through untouched.
fn normalize_document_url(url: &str) -> String {
    unescape(&unescape(url)).trim().to_string()
}

/// Percent-decode, keeping the input whenever the decoded bytes are not valid
/// UTF-8.
fn unescape(s: &str) -> String {
    match percent_decode_str(s).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => s.to_string(),
    }
}
