#![cfg(feature = "vat")]

use artisanflow::core::{ClientProfile, needs_vat_question};
use artisanflow::vat::*;

// ---------------------------------------------------------------------------
// EU VAT numbers
// ---------------------------------------------------------------------------

#[test]
fn fr_valid() {
    let c = check_vat_number("FR12345678901", "FR").unwrap();
    assert_eq!(c.number, "12345678901");
    assert_eq!(c.status, VatNumberStatus::FormatValid);
}

#[test]
fn fr_alpha_key() {
    assert!(check_vat_number("FRAB123456789", "FR").is_ok());
}

#[test]
fn fr_without_prefix() {
    assert!(check_vat_number("12 345 678 901", "FR").is_ok());
}

#[test]
fn at_requires_u_prefix() {
    assert!(check_vat_number("ATU12345678", "AT").is_ok());
    assert!(check_vat_number("AT12345678", "AT").is_err());
}

#[test]
fn nl_valid() {
    assert!(check_vat_number("NL123456789B01", "NL").is_ok());
    assert!(check_vat_number("NL123456789A01", "NL").is_err());
}

#[test]
fn lu_and_pt() {
    assert!(check_vat_number("LU12345678", "LU").is_ok());
    assert!(check_vat_number("PT123456789", "PT").is_ok());
    assert!(check_vat_number("PT12345678", "PT").is_err());
}

#[test]
fn es_alphanumeric() {
    assert!(check_vat_number("ESX1234567X", "ES").is_ok());
}

#[test]
fn number_checked_against_given_country() {
    // A valid German number is not a valid Italian one.
    assert!(check_vat_number("DE123456789", "IT").is_err());
}

#[test]
fn non_ascii_rejected() {
    let err = check_vat_number("FR12345678９01", "FR").unwrap_err();
    assert!(err.reason.contains("ASCII"));
}

// ---------------------------------------------------------------------------
// Non-EU identifiers
// ---------------------------------------------------------------------------

#[test]
fn swiss_uid_with_language_suffix() {
    for uid in [
        "CHE-123.456.789",
        "CHE-123.456.789 TVA",
        "CHE-123.456.789 MWST",
        "CHE-123.456.789 IVA",
    ] {
        assert!(check_vat_number(uid, "CH").is_ok(), "{uid}");
    }
    assert!(check_vat_number("CHE-123.456.789 VAT", "CH").is_err());
}

#[test]
fn gb_nine_digits() {
    assert!(check_vat_number("GB123456789", "GB").is_ok());
    assert!(check_vat_number("gb 123456789", "GB").is_ok());
    assert!(check_vat_number("GB1234567890", "GB").is_err());
}

#[test]
fn canada() {
    assert!(check_vat_number("123456789 RT 0001", "CA").is_ok());
    assert!(check_vat_number("1234567890TQ0001", "CA").is_ok());
    assert!(check_vat_number("1234567890", "CA").is_err());
}

#[test]
fn us_not_applicable() {
    assert_eq!(
        check_vat_number("12-3456789", "US").unwrap().status,
        VatNumberStatus::NotApplicable
    );
}

#[test]
fn uk_company_numbers() {
    assert!(validate_uk_company_number("12345678").is_ok());
    assert!(validate_uk_company_number("SC12345!").is_err());
}

// ---------------------------------------------------------------------------
// Onboarding flow
// ---------------------------------------------------------------------------

#[test]
fn business_client_with_checked_number() {
    let company = "Klein GmbH";
    assert!(needs_vat_question(company));

    let check = check_vat_number("DE 123 456 789", "DE").unwrap();
    let profile = ClientProfile::new("Eva", "Klein", "eva@klein.de")
        .company(company)
        .country(check.country.clone())
        .vat_number(format!("{}{}", check.country, check.number))
        .vat_registered(true);
    assert_eq!(profile.vat_number.as_deref(), Some("DE123456789"));
    assert!(profile.is_business());
}
