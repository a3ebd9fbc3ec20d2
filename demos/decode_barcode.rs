use pankki::*;

fn main() {
    // ── 1. Decode a barcode ───────────────────────────────────────────
    println!("=== Barcode ===");
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "435500001202535040012340500000000000000000001232000000".into());

    match InvoiceBarcode::parse(&raw) {
        Ok(barcode) => {
            println!("  IBAN:      {}", barcode.iban);
            println!("  BBAN:      {}", barcode.account.bban);
            println!("  Bank:      {}", barcode.account.bank);
            println!("  Amount:    {} EUR", barcode.amount);
            println!("  Reference: {}", barcode.reference.for_print());
            match barcode.due_date {
                Some(date) => println!("  Due date:  {}", date.format("%d.%m.%Y")),
                None => println!("  Due date:  none"),
            }
            println!("  Valid:     {}", barcode.is_valid());
        }
        Err(e) => {
            println!("  Rejected: {e}");
            if let PankkiError::InvalidBarcode(cause) = &e {
                println!("  Cause:    {cause}");
            }
        }
    }

    // ── 2. Legacy account → IBAN ──────────────────────────────────────
    println!("\n=== Legacy Account ===");
    for legacy in ["123456-785", "500001-2253504", "123456-784"] {
        match FinnishAccountNumber::from_bban(legacy) {
            Ok(account) => println!("  {legacy:>16} → {} ({})", account.iban, account.bank.bic()),
            Err(e) => println!("  {legacy:>16} → error: {e}"),
        }
    }

    // ── 3. Reference numbers ──────────────────────────────────────────
    println!("\n=== Reference ===");
    match ReferenceNumber::from_base("2024 0001") {
        Ok(reference) => println!("  Generated: {}", reference.for_print()),
        Err(e) => println!("  Generation failed: {e}"),
    }
    for raw in ["1232", "1230", "12A2"] {
        println!("  {raw}: {:?}", is_valid_reference(raw));
    }
}
