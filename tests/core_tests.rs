use artisanflow::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn client(profile: ClientProfile) -> ClientRecord {
    ClientRecord::from_profile(1, profile)
}

// ---------------------------------------------------------------------------
// Currency resolver
// ---------------------------------------------------------------------------

#[test]
fn unknown_countries_resolve_to_euro() {
    let france = currency_for_country("FR");
    for code in ["", "XX", "JP", "fra", "🇫🇷"] {
        assert_eq!(currency_for_country(code), france, "{code:?}");
    }
    assert_eq!(france.code, "EUR");
    assert_eq!(france.symbol, "€");
}

#[test]
fn supported_currencies_are_iso_codes() {
    for (country, currency) in countries_with_currency() {
        assert_eq!(currency.code.len(), 3, "{country}");
        assert!(is_known_currency_code(currency.code), "{country}");
    }
}

#[test]
fn currency_table_covers_supported_countries() {
    let with_currency: Vec<_> = countries_with_currency().map(|(c, _)| c).collect();
    let supported: Vec<_> = supported_countries().collect();
    assert_eq!(with_currency, supported);
}

#[test]
fn currency_descriptor_serializes_flat() {
    insta::assert_json_snapshot!(currency_for_country("CA"), @r###"
    {
      "code": "CAD",
      "symbol": "$ CA",
      "name": "Dollar canadien"
    }
    "###);
}

// ---------------------------------------------------------------------------
// VAT resolver
// ---------------------------------------------------------------------------

#[test]
fn resolver_without_profile_is_zero() {
    assert_eq!(resolve_vat_rate(None), Decimal::ZERO);
    let summary_only = ClientRecord::new(3, "Bernard Entreprise SARL", "contact@bernard.fr");
    assert_eq!(resolve_vat_rate(Some(&summary_only)), Decimal::ZERO);
}

#[test]
fn individuals_pay_their_country_normal_rate() {
    for code in supported_countries() {
        let c = client(ClientProfile::new("A", "B", "a@b.c").country(code));
        assert_eq!(resolve_vat_rate(Some(&c)), vat_rates_for(code)[0].rate, "{code}");
    }
}

#[test]
fn registered_businesses_are_reverse_charged_everywhere() {
    for code in supported_countries().chain(["XX", ""]) {
        let c = client(
            ClientProfile::new("A", "B", "a@b.c")
                .company("ACME")
                .country(code)
                .vat_registered(true),
        );
        assert_eq!(resolve_vat_rate(Some(&c)), Decimal::ZERO, "{code}");
    }
}

#[test]
fn unregistered_business_pays_normal_rate() {
    let c = client(
        ClientProfile::new("A", "B", "a@b.lu")
            .company("ACME Sàrl")
            .country("LU"),
    );
    assert_eq!(resolve_vat_rate(Some(&c)), dec!(17));
}

#[test]
fn vat_flag_ignored_without_company() {
    let c = client(
        ClientProfile::new("A", "B", "a@b.it")
            .country("IT")
            .vat_registered(true),
    );
    assert_eq!(resolve_vat_rate(Some(&c)), dec!(22));
}

// ---------------------------------------------------------------------------
// Amount calculator
// ---------------------------------------------------------------------------

#[test]
fn hundred_at_twenty_percent() {
    let c = client(ClientProfile::new("A", "B", "a@b.fr").country("FR"));
    let r = compute_amounts(dec!(100), Some(&c));
    assert_eq!(
        r,
        TaxComputation {
            total_excl_tax: dec!(100.00),
            tax_rate: dec!(20),
            tax_amount: dec!(20.00),
            total_incl_tax: dec!(120.00),
        }
    );
}

#[test]
fn reverse_charged_total_is_unchanged() {
    let c = client(
        ClientProfile::new("A", "B", "a@b.de")
            .company("ACME GmbH")
            .country("DE")
            .vat_registered(true),
    );
    let r = compute_amounts(dec!(2500.40), Some(&c));
    assert_eq!(r.tax_amount, dec!(0));
    assert_eq!(r.total_incl_tax, dec!(2500.40));
    assert_eq!(vat_label(r.tax_rate), "TVA (auto-liquidation)");
}

#[test]
fn per_quote_override_uses_keyed_rate() {
    let export = vat_rate_by_key("FR", VatRateKey::Export).unwrap();
    let r = compute_amounts_with_rate(dec!(800), export.rate);
    assert_eq!(r.total_incl_tax, dec!(800.00));

    let reduced = vat_rates_for("FR")[2];
    assert_eq!(reduced.rate, dec!(5.5));
    let r = compute_amounts_with_rate(dec!(800), reduced.rate);
    assert_eq!(r.tax_amount, dec!(44.00));
}

#[test]
fn computation_serializes_camel_case() {
    let r = compute_amounts_with_rate(dec!(100), dec!(20));
    let json = serde_json::to_value(r).unwrap();
    let field = |name: &str| -> Decimal { json[name].as_str().unwrap().parse().unwrap() };
    assert_eq!(field("totalExclTax"), dec!(100));
    assert_eq!(field("taxRate"), dec!(20));
    assert_eq!(field("taxAmount"), dec!(20));
    assert_eq!(field("totalInclTax"), dec!(120));
}

#[test]
fn extreme_totals_saturate() {
    let c = client(ClientProfile::new("A", "B", "a@b.fr").country("FR"));
    let r = compute_amounts(Decimal::MAX, Some(&c));
    assert_eq!(r.tax_rate, dec!(20));
    assert_eq!(r.total_incl_tax, Decimal::MAX);
    assert!(compute_deposit(Decimal::MAX, DEFAULT_DEPOSIT_PERCENTAGE) < Decimal::MAX);
}

#[test]
fn deposit_on_quote_total() {
    assert_eq!(
        compute_deposit(dec!(1500), DEFAULT_DEPOSIT_PERCENTAGE),
        dec!(450.00)
    );
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

#[test]
fn country_selection_list() {
    let labels: Vec<_> = supported_countries()
        .filter_map(country_label)
        .collect();
    assert_eq!(labels.len(), supported_countries().count());
    assert!(labels.iter().all(|l| l.chars().next().is_some_and(|c| !c.is_ascii())));
}

#[test]
fn amount_formatting() {
    assert_eq!(format_amount(dec!(1999.9), "CH", false), "1999,90 CHF");
    assert_eq!(format_amount(dec!(12), "GB", true), "12,00 GBP");
}

// ---------------------------------------------------------------------------
// Client profile wire format
// ---------------------------------------------------------------------------

#[test]
fn profile_accepts_legacy_vat_flag() {
    let json = r#"{"firstName":"Paul","lastName":"Bernard","email":"p@b.fr","company":"Bernard SARL","country":"BE","tvaAssujetti":true}"#;
    let profile: ClientProfile = serde_json::from_str(json).unwrap();
    assert!(profile.vat_registered);
    assert_eq!(
        profile.kind(),
        ClientKind::Business {
            vat_registered: true
        }
    );
}

#[test]
fn record_wire_format() {
    let record = ClientRecord::from_profile(
        4,
        ClientProfile::new("Luc", "Petit", "luc@petit.fr").country("FR"),
    );
    insta::assert_json_snapshot!(record, @r###"
    {
      "id": 4,
      "name": "Luc Petit",
      "email": "luc@petit.fr",
      "phone": "",
      "fullData": {
        "firstName": "Luc",
        "lastName": "Petit",
        "email": "luc@petit.fr",
        "country": "FR",
        "vatRegistered": false
      }
    }
    "###);
}

#[test]
fn legacy_config_parses() {
    let json = r#"{"country":"CA","tauxHoraire":"70","margeMateriaux":"10","tvaStatus":"intracommunautaire"}"#;
    let config: ArtisanConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.vat_status, VatStatus::IntraCommunity);
    assert_eq!(config.currency().code, "CAD");
    assert!(config.validate().is_empty());
}
