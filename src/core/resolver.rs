//! VAT rate resolution for a client.

use rust_decimal::Decimal;

use super::client::{ClientKind, ClientRecord};
use super::countries::DEFAULT_COUNTRY;
use super::rates::normal_rate;

/// VAT rate (percent) to charge `client`.
///
/// # Logic
///
/// 1. No client, or no enriched profile → 0
/// 2. Individual → normal rate of the client's country (France when unset)
/// 3. VAT-registered business → 0 (reverse charge, the buyer self-assesses)
/// 4. Business not registered for VAT → normal rate of the client's country
pub fn resolve_vat_rate(client: Option<&ClientRecord>) -> Decimal {
    let Some(profile) = client.and_then(|c| c.full_data.as_ref()) else {
        return Decimal::ZERO;
    };
    let country = profile.country.as_deref().unwrap_or(DEFAULT_COUNTRY);

    match profile.kind() {
        ClientKind::Business {
            vat_registered: true,
        } => Decimal::ZERO,
        ClientKind::Individual
        | ClientKind::Business {
            vat_registered: false,
        } => normal_rate(country),
    }
}

/// Display label of a VAT line: `"TVA (auto-liquidation)"` for a zero
/// rate, otherwise e.g. `"TVA (20%)"`.
pub fn vat_label(rate: Decimal) -> String {
    if rate.is_zero() {
        return "TVA (auto-liquidation)".to_string();
    }
    format!("TVA ({}%)", rate.normalize())
}
