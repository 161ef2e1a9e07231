#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = assetpack::config::parse_str(content, assetpack::config::ConfigFormat::Yaml);
    }
});
