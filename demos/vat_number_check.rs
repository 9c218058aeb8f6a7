use artisanflow::vat::*;

fn main() {
    println!("=== VAT number format checks ===\n");

    let inputs = [
        ("FR 12 345678901", "FR"),
        ("BE0123.456.789", "BE"),
        ("DE012345678", "DE"),         // leading zero
        ("CHE-123.456.789 TVA", "CH"),
        ("GB123456789", "GB"),
        ("1234567890TQ0001", "CA"),
        ("12-3456789", "US"),
        ("JP1234", "JP"),
    ];

    for (number, country) in &inputs {
        match check_vat_number(number, country) {
            Ok(check) => println!("  {country} {number} => {:?} ({})", check.status, check.number),
            Err(e) => println!("  {country} {number} => INVALID: {e}"),
        }
    }
}
