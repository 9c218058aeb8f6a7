//! Offline format checks for VAT and business identifiers.

use std::fmt;

/// Error returned when an identifier fails format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VatFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for VatFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for VatFormatError {}

/// Outcome of a successful format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VatNumberStatus {
    /// Matches the national format. Registration itself is not verified.
    FormatValid,
    /// The country has no VAT (United States).
    NotApplicable,
    /// No format rule for this country; accepted as is.
    Unchecked,
}

/// A checked identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VatNumberCheck {
    /// Uppercase country code the number was checked for.
    pub country: String,
    /// Number without separators or country prefix.
    pub number: String,
    pub status: VatNumberStatus,
}

type NumberValidator = fn(&str) -> bool;

fn digits(n: &str, len: usize) -> bool {
    n.len() == len && n.chars().all(|c| c.is_ascii_digit())
}

/// Check `vat_number` against the format used in `country_code`.
///
/// Separators (spaces, `-`, `.`) and a leading country prefix are ignored
/// for EU and UK numbers. Swiss numbers keep the official
/// `CHE-123.456.789` layout, optionally followed by `TVA`, `MWST` or `IVA`.
/// Canadian numbers are a GST (`123456789RT0001`) or Quebec TVQ
/// (`1234567890TQ0001`) account.
pub fn check_vat_number(
    vat_number: &str,
    country_code: &str,
) -> Result<VatNumberCheck, VatFormatError> {
    let country = country_code.trim().to_uppercase();
    let fail = |reason: String| VatFormatError {
        value: vat_number.to_string(),
        reason,
    };
    let checked = |number: String, status| VatNumberCheck {
        country: country.clone(),
        number,
        status,
    };

    if !vat_number.is_ascii() {
        return Err(fail("must contain only ASCII characters".into()));
    }

    let eu_patterns: &[(&str, NumberValidator)] = &[
        ("AT", |n| n.len() == 9 && n.starts_with('U') && digits(&n[1..], 8)),
        ("BE", |n| digits(n, 10)),
        ("DE", |n| digits(n, 9) && !n.starts_with('0')),
        ("ES", |n| n.len() == 9 && n.chars().all(|c| c.is_ascii_alphanumeric())),
        ("FR", |n| {
            n.len() == 11
                && n[..2].chars().all(|c| c.is_ascii_alphanumeric())
                && digits(&n[2..], 9)
        }),
        ("IT", |n| digits(n, 11)),
        ("LU", |n| digits(n, 8)),
        ("NL", |n| {
            n.len() == 12
                && digits(&n[..9], 9)
                && n.as_bytes()[9] == b'B'
                && digits(&n[10..], 2)
        }),
        ("PT", |n| digits(n, 9)),
    ];

    if let Some((_, validator)) = eu_patterns.iter().find(|(code, _)| *code == country) {
        let number = strip_prefix(&clean(vat_number), &country);
        if !validator(&number) {
            return Err(fail(format!("invalid format for country {country}")));
        }
        return Ok(checked(number, VatNumberStatus::FormatValid));
    }

    match country.as_str() {
        "CH" => {
            let number = swiss_uid(vat_number)
                .ok_or_else(|| fail("Swiss UID must look like CHE-123.456.789".into()))?;
            Ok(checked(number, VatNumberStatus::FormatValid))
        }
        "GB" => {
            let number = strip_prefix(&clean(vat_number), "GB");
            if !digits(&number, 9) {
                return Err(fail("UK VAT number must be 9 digits".into()));
            }
            Ok(checked(number, VatNumberStatus::FormatValid))
        }
        "CA" => {
            let number = clean(vat_number);
            let is_tvq = number.len() == 16
                && digits(&number[..10], 10)
                && &number[10..12] == "TQ"
                && digits(&number[12..], 4);
            let is_gst = number.len() == 15
                && digits(&number[..9], 9)
                && &number[9..11] == "RT"
                && digits(&number[11..], 4);
            if !(is_tvq || is_gst) {
                return Err(fail(
                    "expected a GST (#########RT####) or TVQ (##########TQ####) number".into(),
                ));
            }
            Ok(checked(number, VatNumberStatus::FormatValid))
        }
        "US" => Ok(checked(clean(vat_number), VatNumberStatus::NotApplicable)),
        _ => Ok(checked(clean(vat_number), VatNumberStatus::Unchecked)),
    }
}

/// Check a UK Companies House number: 8 letters or digits.
/// Returns the uppercase number on success.
pub fn validate_uk_company_number(number: &str) -> Result<String, VatFormatError> {
    let cleaned = number.trim().to_uppercase();
    if cleaned.len() == 8 && cleaned.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Ok(cleaned);
    }
    Err(VatFormatError {
        value: number.into(),
        reason: "UK company number must be 8 letters or digits".into(),
    })
}

fn clean(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .collect::<String>()
        .to_uppercase()
}

fn strip_prefix(number: &str, country: &str) -> String {
    number.strip_prefix(country).unwrap_or(number).to_string()
}

/// `CHE-123.456.789[ TVA|MWST|IVA]` → `CHE123456789`.
fn swiss_uid(value: &str) -> Option<String> {
    let upper = value.trim().to_uppercase();
    let core = ["TVA", "MWST", "IVA"]
        .iter()
        .find_map(|suffix| upper.strip_suffix(suffix))
        .unwrap_or(upper.as_str())
        .trim_end();

    let bytes = core.as_bytes();
    let layout_ok = core.len() == 15
        && core.starts_with("CHE-")
        && bytes[7] == b'.'
        && bytes[11] == b'.'
        && [4..7, 8..11, 12..15]
            .into_iter()
            .all(|range| digits(&core[range], 3));
    layout_ok.then(|| core.replace(['-', '.'], ""))
}
