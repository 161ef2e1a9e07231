#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        let parameters = BTreeMap::from([
            ("wwwDir".to_string(), "/srv/www".to_string()),
            ("cdn".to_string(), "https://cdn.example.com".to_string()),
        ]);
        let _ = assetpack::config::expand_parameters(value, &parameters);
    }
});
