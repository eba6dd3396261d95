//! Image candidate lists (`srcset` / `imagesrcset`).
//!
//! Each candidate is a URL optionally followed by a width or density
//! descriptor (`480w`, `2x`). Only the URL token is resolved; the descriptor
//! tail is carried over verbatim. The rejoined list uses a uniform `", "`
//! separator.

use crate::resolve::UrlResolver;

pub(crate) fn resolve_candidates(value: &str, resolver: &UrlResolver) -> String {
    value
        .split(',')
        .map(|candidate| {
            let candidate = candidate.trim();
            if candidate.is_empty() {
                return String::new();
            }
            let (url, tail) = split_descriptor(candidate);
            format!("{}{}", resolver.resolve(url), tail)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split at the first whitespace run: the leading run of non-whitespace is the
/// URL, the remainder (whitespace included) is the descriptor tail.
fn split_descriptor(candidate: &str) -> (&str, &str) {
    match candidate.find(char::is_whitespace) {
        Some(at) => candidate.split_at(at),
        None => (candidate, ""),
    }
}
