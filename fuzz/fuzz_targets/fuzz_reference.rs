#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = pankki::is_valid_reference(s);
        if let Ok(reference) = pankki::ReferenceNumber::from_base(s) {
            // A generated reference always validates
            assert!(reference.is_valid());
        }
    }
});
