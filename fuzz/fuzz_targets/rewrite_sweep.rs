#![no_main]

use libfuzzer_sys::fuzz_target;

use dom::Document;
use urls::DocumentUrls;

// Arbitrary markup through parse -> sweep -> serialize must not panic.
fuzz_target!(|data: &[u8]| {
    let Ok(html) = std::str::from_utf8(data) else {
        return;
    };
    let doc = Document::parse_with_url(html, "https://fuzz.example/dir/page.html");
    doc.resolve_all_relative_urls();
    let _ = doc.to_html();
});
