#![no_main]

use libfuzzer_sys::fuzz_target;
use mime_db::{parse_source, SourceEncoding};

fuzz_target!(|data: &[u8]| {
    // Auto exercises both the gzip and the plain-text paths
    let _ = parse_source(data, SourceEncoding::Auto);
});
