#![no_main]

use libfuzzer_sys::fuzz_target;

use dom::Document;
use urls::DocumentUrls;

// Resolution must never panic and always hand back a string, whatever the
// candidate looks like.
fuzz_target!(|data: &[u8]| {
    let Ok(candidate) = std::str::from_utf8(data) else {
        return;
    };
    let doc = Document::parse_with_url(
        r#"<html><head><base href="/nested/base/"></head></html>"#,
        "https://fuzz.example/dir/page.html",
    );
    let _ = doc.resolve_relative_url(candidate);
});
