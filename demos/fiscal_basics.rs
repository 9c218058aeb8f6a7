use artisanflow::core::*;
use rust_decimal_macros::dec;

fn main() {
    println!("=== Currencies ===\n");
    for (country, currency) in countries_with_currency() {
        let label = country_label(country).unwrap_or(country);
        println!("  {label:<24} {} ({})", currency.code, currency.symbol);
    }
    println!("  unknown 'JP' falls back to {}", currency_for_country("JP").code);

    println!("\n=== VAT rates for Belgium ===\n");
    for entry in vat_rates_for("BE") {
        let key = entry.key.map(|k| k.code()).unwrap_or("-");
        println!("  {:>7}%  {:<40} key={key}", entry.rate, entry.label);
    }

    println!("\n=== Quote totals (1250.00 HT) ===\n");
    let clients = [
        ClientProfile::new("Jean", "Dupont", "jean@example.fr"),
        ClientProfile::new("Eva", "Klein", "eva@klein.de")
            .company("Klein GmbH")
            .country("DE")
            .vat_registered(true),
        ClientProfile::new("Marc", "Rochat", "marc@rochat.ch")
            .company("Rochat SA")
            .country("CH"),
    ];
    for (i, profile) in clients.into_iter().enumerate() {
        let client = ClientRecord::from_profile(i as u64 + 1, profile);
        let r = compute_amounts(dec!(1250), Some(&client));
        println!(
            "  {:<28} {:<24} TTC {}",
            client.name,
            vat_label(r.tax_rate),
            format_amount(r.total_incl_tax, "FR", false)
        );
    }

    let deposit = compute_deposit(dec!(1250), DEFAULT_DEPOSIT_PERCENTAGE);
    println!("\n  Acompte {DEFAULT_DEPOSIT_PERCENTAGE}%: {}", format_amount(deposit, "FR", false));
}
