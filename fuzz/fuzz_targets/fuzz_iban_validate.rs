#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = pankki::is_valid_iban(s);
        let _ = pankki::AccountNumber::from_iban(s);
        let _ = pankki::FinnishAccountNumber::from_iban(s);
        let _ = pankki::FinnishAccountNumber::from_bban(s);
    }
});
