//! Core fiscal rules: country tables, client classification, VAT
//! resolution, and amount calculation.
//!
//! Everything here is a pure function of its inputs; persistence lives in
//! the `registry` module.

mod amounts;
mod client;
mod config;
pub mod countries;
pub mod currencies;
mod error;
pub mod rates;
mod resolver;

pub use amounts::*;
pub use client::*;
pub use config::*;
pub use countries::{
    DEFAULT_COUNTRY, country_label, is_known_country_code, normalize_country, supported_countries,
};
pub use currencies::{
    Currency, countries_with_currency, currency_for_country, format_amount, is_known_currency_code,
};
pub use error::*;
pub use rates::{VatRateEntry, VatRateKey, normal_rate, vat_rate_by_key, vat_rates_for};
pub use resolver::*;
