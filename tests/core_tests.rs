use pankki::*;

// ---------------------------------------------------------------------------
// ISO 7064 checksum
// ---------------------------------------------------------------------------

#[test]
fn rearranged_valid_ibans_checksum_to_one() {
    for iban in [
        "FI2112345600000785",
        "DE89370400440532013000",
        "GB29NWBK60161331926819",
        "NO9386011117947",
    ] {
        let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
        assert_eq!(checksum_iso7064(&rearranged).unwrap(), 1, "{iban}");
    }
}

#[test]
fn checksum_of_empty_input_is_error() {
    assert!(matches!(
        checksum_iso7064(""),
        Err(PankkiError::InvalidInput(_))
    ));
}

// ---------------------------------------------------------------------------
// IBAN validation
// ---------------------------------------------------------------------------

#[test]
fn iban_valid_with_spaces() {
    assert!(is_valid_iban("FI21 1234 5600 0007 85"));
    assert!(is_valid_iban("GB29 NWBK 6016 1331 9268 19"));
}

#[test]
fn iban_invalid_checksum() {
    assert!(!is_valid_iban("FI21 1234 5600 0007 84"));
}

#[test]
fn iban_never_panics_on_garbage() {
    for raw in ["", "F", "FI", "FI2", "💶💶💶💶💶", "FI21 !!!!", "1234567890"] {
        assert!(!is_valid_iban(raw), "{raw}");
    }
}

#[test]
fn iban_length_table() {
    assert_eq!(iban::iban_length("FI"), Some(18));
    assert_eq!(iban::iban_length("SE"), Some(24));
    assert!(!iban::is_known_iban_country("US"));
}

#[test]
fn generic_account_from_iban() {
    let account = AccountNumber::from_iban("NL91 ABNA 0417 1643 00").unwrap();
    assert_eq!(account.iban(), Some("NL91ABNA0417164300"));
    assert_eq!(account.country_code(), Some("NL"));
}

// ---------------------------------------------------------------------------
// Finnish accounts
// ---------------------------------------------------------------------------

#[test]
fn legacy_nordea_account() {
    let account = FinnishAccountNumber::from_bban("123456-785").unwrap();
    assert_eq!(account.iban, "FI2112345600000785");
    assert_eq!(account.machine_bban, "12345600000785");
    assert_eq!(account.bban, "123456-785");
    assert_eq!(account.bank.bic(), "NDEAFIHH");
    assert_eq!(account.bank.name(), Some("Nordea Pankki"));
    assert_eq!(account.bank.branch_code(), "XXX");
}

#[test]
fn legacy_op_account() {
    let account = FinnishAccountNumber::from_bban("500001-2253504").unwrap();
    assert_eq!(account.iban, "FI3550000120253504");
    assert_eq!(account.bban, "5000012-253504");
    assert_eq!(account.bank.bic(), "OKOYFIHH");
    assert_eq!(account.bank.bban_offset, 7);
}

#[test]
fn legacy_with_separators_and_spaces() {
    let a = FinnishAccountNumber::from_bban(" 123456 - 785 ").unwrap();
    let b = FinnishAccountNumber::from_bban("123456785").unwrap();
    assert_eq!(a, b);
}

#[test]
fn legacy_to_iban_and_back() {
    let legacy = FinnishAccountNumber::from_bban("423456-781").unwrap();
    let from_iban = FinnishAccountNumber::from_iban(&legacy.iban).unwrap();
    assert_eq!(from_iban.machine_bban, legacy.machine_bban);
    assert_eq!(from_iban.bban, legacy.bban);
    assert_eq!(from_iban.bank, legacy.bank);
}

#[test]
fn legacy_errors() {
    assert!(matches!(
        FinnishAccountNumber::from_bban("1234567"),
        Err(PankkiError::InvalidFormat(_))
    ));
    assert!(matches!(
        FinnishAccountNumber::from_bban("923456-785"),
        Err(PankkiError::UnknownBank(_))
    ));
    assert!(matches!(
        FinnishAccountNumber::from_bban("123456-784"),
        Err(PankkiError::InvalidFormat(_))
    ));
}

#[test]
fn iban_wrong_country() {
    let err = FinnishAccountNumber::from_iban("DE89370400440532013000").unwrap_err();
    assert_eq!(
        err,
        PankkiError::WrongCountry {
            expected: "FI".into(),
            found: "DE".into()
        }
    );
}

#[test]
fn bank_lookup_prefers_shortest_prefix() {
    // "3" alone is not a bank, "39" is
    let bank = BankRegistry::finnish().lookup("39123").unwrap();
    assert_eq!(bank.bic(), "SBANFIHH");
    // "715" needs all three digits
    let bank = BankRegistry::finnish().lookup("715").unwrap();
    assert_eq!(bank.bic(), "ITELFIHH");
}

#[test]
fn bank_lookup_ignores_leading_zeros() {
    let bank = BankRegistry::finnish().lookup("03100001000000").unwrap();
    assert_eq!(bank.bic(), "HANDFIHH");
    let account = FinnishAccountNumber::from_iban("FI0001234560000785").unwrap();
    assert_eq!(account.bank.bic(), "NDEAFIHH");
    assert_eq!(account.bban, "012345-60000785");
}

#[test]
fn luhn_bban() {
    assert!(luhn_bban_valid("12345600000785"));
    assert!(!luhn_bban_valid("12345600000780"));
    assert!(!luhn_bban_valid("123456785"));
}

// ---------------------------------------------------------------------------
// Reference numbers
// ---------------------------------------------------------------------------

#[test]
fn reference_1234561() {
    assert!(is_valid_reference("1234561").unwrap());
    for d in ['0', '2', '3', '4', '5', '6', '7', '8', '9'] {
        assert!(
            !is_valid_reference(&format!("123456{d}")).unwrap(),
            "check digit {d} must be rejected"
        );
    }
}

#[test]
fn reference_print_form() {
    let r = ReferenceNumber::new("00000000000001234561").unwrap();
    assert_eq!(r.for_print(), "12 34561");
}

#[test]
fn reference_generation_round_trip() {
    let r = ReferenceNumber::from_base("2024 0001").unwrap();
    assert!(r.is_valid());
    assert!(is_valid_reference(r.as_str()).unwrap());
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn account_serde_round_trip() {
    let account = FinnishAccountNumber::from_bban("123456-785").unwrap();
    let json = serde_json::to_string(&account).unwrap();
    let back: FinnishAccountNumber = serde_json::from_str(&json).unwrap();
    assert_eq!(back, account);
}

#[test]
fn reference_serializes_as_string() {
    let r = ReferenceNumber::new("1232").unwrap();
    assert_eq!(serde_json::to_string(&r).unwrap(), "\"1232\"");
    let back: ReferenceNumber = serde_json::from_str("\"12 32\"").unwrap();
    assert_eq!(back, r);
    assert!(serde_json::from_str::<ReferenceNumber>("\"12a\"").is_err());
}
