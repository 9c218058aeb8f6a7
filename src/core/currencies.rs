//! Country → currency table and ISO 4217 validation.
//!
//! The artisan's currency follows the country chosen during configuration.
//! Unknown countries silently use the euro.

use rust_decimal::Decimal;
use serde::Serialize;

use super::amounts::round_half_up;
use super::countries::DEFAULT_COUNTRY;

/// Display descriptor of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// ISO 4217 code (e.g. "EUR").
    pub code: &'static str,
    /// Display symbol (e.g. "€", "$ CA").
    pub symbol: &'static str,
    /// Display name.
    pub name: &'static str,
}

const EUR: Currency = Currency {
    code: "EUR",
    symbol: "€",
    name: "Euro",
};

static CURRENCY_BY_COUNTRY: &[(&str, Currency)] = &[
    ("FR", EUR),
    ("BE", EUR),
    ("LU", EUR),
    ("DE", EUR),
    ("IT", EUR),
    ("ES", EUR),
    ("PT", EUR),
    ("NL", EUR),
    ("AT", EUR),
    (
        "CH",
        Currency {
            code: "CHF",
            symbol: "CHF",
            name: "Franc suisse",
        },
    ),
    (
        "GB",
        Currency {
            code: "GBP",
            symbol: "£",
            name: "Livre sterling",
        },
    ),
    (
        "US",
        Currency {
            code: "USD",
            symbol: "$",
            name: "Dollar américain",
        },
    ),
    (
        "CA",
        Currency {
            code: "CAD",
            symbol: "$ CA",
            name: "Dollar canadien",
        },
    ),
    (
        "AU",
        Currency {
            code: "AUD",
            symbol: "$ AU",
            name: "Dollar australien",
        },
    ),
    (
        "NZ",
        Currency {
            code: "NZD",
            symbol: "$ NZ",
            name: "Dollar néo-zélandais",
        },
    ),
];

/// Currency of `country_code`. Unknown or empty codes resolve to the
/// France / EUR entry.
pub fn currency_for_country(country_code: &str) -> &'static Currency {
    lookup(country_code.trim())
        .or_else(|| lookup(DEFAULT_COUNTRY))
        .unwrap_or(&EUR)
}

fn lookup(code: &str) -> Option<&'static Currency> {
    CURRENCY_BY_COUNTRY
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, currency)| currency)
}

/// All supported countries with their currency, in table order.
pub fn countries_with_currency() -> impl Iterator<Item = (&'static str, &'static Currency)> {
    CURRENCY_BY_COUNTRY
        .iter()
        .map(|(code, currency)| (*code, currency))
}

/// Format an amount in the currency of `country_code`.
///
/// Two decimals, comma as decimal separator, then the symbol (or the ISO
/// code when `show_code` is set): `1234.5` in "FR" → `"1234,50 €"`.
pub fn format_amount(amount: Decimal, country_code: &str, show_code: bool) -> String {
    let currency = currency_for_country(country_code);
    let formatted = format!("{:.2}", round_half_up(amount, 2)).replace('.', ",");
    let unit = if show_code {
        currency.code
    } else {
        currency.symbol
    };
    format!("{formatted} {unit}")
}

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Sorted list of common ISO 4217 currency codes.
static CURRENCY_CODES: &[&str] = &[
    "AUD", // Australian Dollar
    "BGN", // Bulgarian Lev
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CZK", // Czech Koruna
    "DKK", // Danish Krone
    "EUR", // Euro
    "GBP", // Pound Sterling
    "HUF", // Hungarian Forint
    "ISK", // Icelandic Krona
    "JPY", // Japanese Yen
    "MAD", // Moroccan Dirham
    "NOK", // Norwegian Krone
    "NZD", // New Zealand Dollar
    "PLN", // Polish Zloty
    "RON", // Romanian Leu
    "SEK", // Swedish Krona
    "USD", // US Dollar
    "XOF", // CFA Franc BCEAO
    "XPF", // CFP Franc
];
