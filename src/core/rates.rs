//! Country → VAT rate table.
//!
//! Each supported country maps to an ordered list of rates. The first entry
//! is the normal rate applied by the resolver; the others are offered to the
//! artisan as explicit per-quote overrides (reduced rates, and keyed zero
//! rates for exports, intra-community supplies, zero-rated goods and reverse
//! charge).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::countries::{DEFAULT_COUNTRY, normalize_country};

/// Discriminator for the zero-rate sub-cases of a country's rate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatRateKey {
    /// Export outside the customs territory.
    Export,
    /// Intra-community supply to a VAT-registered EU business.
    IntraCommunity,
    /// Goods or services zero-rated by law.
    ZeroRated,
    /// B2B reverse charge: the buyer accounts for the VAT.
    ReverseCharge,
}

impl VatRateKey {
    /// Short code shown next to a rate; same as the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::IntraCommunity => "intra_community",
            Self::ZeroRated => "zero_rated",
            Self::ReverseCharge => "reverse_charge",
        }
    }
}

/// One selectable VAT rate of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VatRateEntry {
    /// Rate in percent (e.g. 20 for 20 %).
    pub rate: Decimal,
    /// Display label.
    pub label: &'static str,
    /// Set only on zero-rate sub-cases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<VatRateKey>,
}

const fn rate(rate: Decimal, label: &'static str) -> VatRateEntry {
    VatRateEntry {
        rate,
        label,
        key: None,
    }
}

const fn zero(label: &'static str, key: VatRateKey) -> VatRateEntry {
    VatRateEntry {
        rate: Decimal::ZERO,
        label,
        key: Some(key),
    }
}

use VatRateKey::{Export, IntraCommunity, ReverseCharge, ZeroRated};

static VAT_RATES_BY_COUNTRY: &[(&str, &[VatRateEntry])] = &[
    (
        "FR",
        &[
            rate(dec!(20), "Taux normal 20 %"),
            rate(dec!(10), "Taux intermédiaire 10 %"),
            rate(dec!(5.5), "Taux réduit 5,5 %"),
            rate(dec!(2.1), "Taux particulier 2,1 %"),
            zero("Export hors UE 0 %", Export),
            zero("Livraison intracommunautaire 0 %", IntraCommunity),
            zero("Autoliquidation 0 %", ReverseCharge),
        ],
    ),
    (
        "BE",
        &[
            rate(dec!(21), "Taux normal 21 %"),
            rate(dec!(12), "Taux intermédiaire 12 %"),
            rate(dec!(6), "Taux réduit 6 %"),
            zero("Export hors UE 0 %", Export),
            zero("Livraison intracommunautaire 0 %", IntraCommunity),
            zero("Autoliquidation (cocontractant) 0 %", ReverseCharge),
        ],
    ),
    (
        "LU",
        &[
            rate(dec!(17), "Taux normal 17 %"),
            rate(dec!(14), "Taux intermédiaire 14 %"),
            rate(dec!(8), "Taux réduit 8 %"),
            rate(dec!(3), "Taux super-réduit 3 %"),
            zero("Export hors UE 0 %", Export),
            zero("Livraison intracommunautaire 0 %", IntraCommunity),
            zero("Autoliquidation 0 %", ReverseCharge),
        ],
    ),
    (
        "DE",
        &[
            rate(dec!(19), "Regelsteuersatz 19 %"),
            rate(dec!(7), "Ermäßigter Steuersatz 7 %"),
            zero("Ausfuhrlieferung 0 %", Export),
            zero("Innergemeinschaftliche Lieferung 0 %", IntraCommunity),
            zero("Steuerschuldnerschaft des Leistungsempfängers 0 %", ReverseCharge),
        ],
    ),
    (
        "IT",
        &[
            rate(dec!(22), "Aliquota ordinaria 22 %"),
            rate(dec!(10), "Aliquota ridotta 10 %"),
            rate(dec!(5), "Aliquota ridotta 5 %"),
            rate(dec!(4), "Aliquota minima 4 %"),
            zero("Esportazione 0 %", Export),
            zero("Cessione intracomunitaria 0 %", IntraCommunity),
            zero("Inversione contabile 0 %", ReverseCharge),
        ],
    ),
    (
        "ES",
        &[
            rate(dec!(21), "Tipo general 21 %"),
            rate(dec!(10), "Tipo reducido 10 %"),
            rate(dec!(4), "Tipo superreducido 4 %"),
            zero("Exportación 0 %", Export),
            zero("Entrega intracomunitaria 0 %", IntraCommunity),
            zero("Inversión del sujeto pasivo 0 %", ReverseCharge),
        ],
    ),
    (
        "PT",
        &[
            rate(dec!(23), "Taxa normal 23 %"),
            rate(dec!(13), "Taxa intermédia 13 %"),
            rate(dec!(6), "Taxa reduzida 6 %"),
            zero("Exportação 0 %", Export),
            zero("Transmissão intracomunitária 0 %", IntraCommunity),
            zero("Autoliquidação 0 %", ReverseCharge),
        ],
    ),
    (
        "NL",
        &[
            rate(dec!(21), "Algemeen tarief 21 %"),
            rate(dec!(9), "Verlaagd tarief 9 %"),
            zero("Export 0 %", Export),
            zero("Intracommunautaire levering 0 %", IntraCommunity),
            zero("Btw verlegd 0 %", ReverseCharge),
        ],
    ),
    (
        "AT",
        &[
            rate(dec!(20), "Normalsteuersatz 20 %"),
            rate(dec!(13), "Ermäßigter Steuersatz 13 %"),
            rate(dec!(10), "Ermäßigter Steuersatz 10 %"),
            zero("Ausfuhrlieferung 0 %", Export),
            zero("Innergemeinschaftliche Lieferung 0 %", IntraCommunity),
            zero("Übergang der Steuerschuld 0 %", ReverseCharge),
        ],
    ),
    (
        "CH",
        &[
            rate(dec!(8.1), "Taux normal 8,1 %"),
            rate(dec!(3.8), "Hébergement 3,8 %"),
            rate(dec!(2.6), "Taux réduit 2,6 %"),
            zero("Exportation 0 %", Export),
        ],
    ),
    (
        "GB",
        &[
            rate(dec!(20), "Standard rate 20 %"),
            rate(dec!(5), "Reduced rate 5 %"),
            zero("Zero rate 0 %", ZeroRated),
            zero("Export 0 %", Export),
            zero("Domestic reverse charge 0 %", ReverseCharge),
        ],
    ),
    ("US", &[rate(dec!(0), "No federal VAT 0 %")]),
    (
        "CA",
        &[
            rate(dec!(14.975), "TPS + TVQ 14,975 %"),
            rate(dec!(5), "TPS seule 5 %"),
            zero("Fournitures détaxées 0 %", ZeroRated),
            zero("Exportation 0 %", Export),
        ],
    ),
    (
        "AU",
        &[
            rate(dec!(10), "GST 10 %"),
            zero("GST-free 0 %", ZeroRated),
            zero("Export 0 %", Export),
        ],
    ),
    (
        "NZ",
        &[
            rate(dec!(15), "GST 15 %"),
            zero("Zero-rated 0 %", ZeroRated),
            zero("Export 0 %", Export),
        ],
    ),
];

fn lookup(code: &str) -> Option<&'static [VatRateEntry]> {
    VAT_RATES_BY_COUNTRY
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, rates)| *rates)
}

/// Ordered rate list of `country_code`; unsupported codes use France's list.
pub fn vat_rates_for(country_code: &str) -> &'static [VatRateEntry] {
    lookup(normalize_country(Some(country_code)))
        .or_else(|| lookup(DEFAULT_COUNTRY))
        .unwrap_or(&[])
}

/// Normal (first-listed) VAT rate of `country_code`.
pub fn normal_rate(country_code: &str) -> Decimal {
    vat_rates_for(country_code)
        .first()
        .map(|entry| entry.rate)
        .unwrap_or(Decimal::ZERO)
}

/// Keyed zero-rate entry of `country_code`, if that country offers it.
pub fn vat_rate_by_key(country_code: &str, key: VatRateKey) -> Option<&'static VatRateEntry> {
    vat_rates_for(country_code)
        .iter()
        .find(|entry| entry.key == Some(key))
}
