//! Which HTML attributes carry URLs, and on which elements.
//!
//! https://html.spec.whatwg.org/#attributes-3

/// Attributes whose value is a single URL.
pub(crate) const URL_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("action", &["form"]),
    ("cite", &["blockquote", "del", "ins", "q"]),
    ("data", &["object"]),
    ("formaction", &["button", "input"]),
    ("href", &["a", "area", "base", "link"]),
    ("ping", &["a", "area"]),
    ("poster", &["video"]),
    (
        "src",
        &[
            "audio", "embed", "iframe", "img", "input", "script", "source", "track", "video",
        ],
    ),
];

/// Attributes whose value is a comma-separated image candidate list.
///
/// https://html.spec.whatwg.org/#srcset-attributes
pub(crate) const SRCSET_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("imagesrcset", &["link"]),
    ("srcset", &["img", "source"]),
];
