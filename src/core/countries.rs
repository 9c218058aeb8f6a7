//! Supported countries, display labels, and ISO 3166-1 alpha-2 validation.
//!
//! The supported list drives both the currency and the VAT rate tables.
//! Any code outside it resolves to [`DEFAULT_COUNTRY`].

/// Country used whenever a code is missing or unsupported.
pub const DEFAULT_COUNTRY: &str = "FR";

/// Supported countries in selection-list order, with flag-prefixed labels.
static COUNTRY_LABELS: &[(&str, &str)] = &[
    ("FR", "🇫🇷 France"),
    ("BE", "🇧🇪 Belgique"),
    ("LU", "🇱🇺 Luxembourg"),
    ("DE", "🇩🇪 Allemagne"),
    ("IT", "🇮🇹 Italie"),
    ("ES", "🇪🇸 Espagne"),
    ("PT", "🇵🇹 Portugal"),
    ("NL", "🇳🇱 Pays-Bas"),
    ("AT", "🇦🇹 Autriche"),
    ("CH", "🇨🇭 Suisse"),
    ("GB", "🇬🇧 Royaume-Uni"),
    ("US", "🇺🇸 États-Unis"),
    ("CA", "🇨🇦 Canada (Québec)"),
    ("AU", "🇦🇺 Australie"),
    ("NZ", "🇳🇿 Nouvelle-Zélande"),
];

/// Codes of all supported countries, in display order.
pub fn supported_countries() -> impl Iterator<Item = &'static str> {
    COUNTRY_LABELS.iter().map(|(code, _)| *code)
}

/// Display label (flag glyph + name) of a supported country.
pub fn country_label(code: &str) -> Option<&'static str> {
    COUNTRY_LABELS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(_, label)| *label)
}

/// Map a possibly missing, padded, or lowercase code onto a supported
/// country code. Unsupported codes fall back to [`DEFAULT_COUNTRY`].
pub fn normalize_country(code: Option<&str>) -> &'static str {
    code.and_then(|c| {
        COUNTRY_LABELS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(c.trim()))
            .map(|(known, _)| *known)
    })
    .unwrap_or(DEFAULT_COUNTRY)
}

/// Check whether `code` is a known ISO 3166-1 alpha-2 country code.
pub fn is_known_country_code(code: &str) -> bool {
    COUNTRY_CODES.binary_search(&code).is_ok()
}

/// Currently assigned ISO 3166-1 alpha-2 codes, sorted for binary search.
static COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];
