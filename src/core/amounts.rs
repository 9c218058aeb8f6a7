use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::client::ClientRecord;
use super::resolver::resolve_vat_rate;

/// Deposit (acompte) requested on acceptance of a quote, in percent.
pub const DEFAULT_DEPOSIT_PERCENTAGE: Decimal = dec!(30);

/// Tax breakdown of a pre-tax total. Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxComputation {
    /// Pre-tax total (HT), rounded to 2 decimals.
    pub total_excl_tax: Decimal,
    /// Applied VAT rate in percent.
    pub tax_rate: Decimal,
    /// VAT amount, rounded to 2 decimals.
    pub tax_amount: Decimal,
    /// Tax-inclusive total (TTC), rounded to 2 decimals.
    pub total_incl_tax: Decimal,
}

/// Compute VAT and the tax-inclusive total for `client`, using the rate
/// chosen by [`resolve_vat_rate`].
///
/// Negative totals are not rejected.
pub fn compute_amounts(total_excl_tax: Decimal, client: Option<&ClientRecord>) -> TaxComputation {
    compute_amounts_with_rate(total_excl_tax, resolve_vat_rate(client))
}

/// Compute amounts with an explicit rate, e.g. a reduced or keyed zero rate
/// picked by the artisan for one quote.
///
/// Results beyond the `Decimal` range saturate at `Decimal::MAX` or
/// `Decimal::MIN`.
pub fn compute_amounts_with_rate(total_excl_tax: Decimal, tax_rate: Decimal) -> TaxComputation {
    let tax_amount = percent_of(total_excl_tax, tax_rate);
    let total_incl_tax = total_excl_tax.saturating_add(tax_amount);

    TaxComputation {
        total_excl_tax: round_half_up(total_excl_tax, 2),
        tax_rate,
        tax_amount: round_half_up(tax_amount, 2),
        total_incl_tax: round_half_up(total_incl_tax, 2),
    }
}

/// Deposit due on a pre-tax total, rounded to 2 decimals.
pub fn compute_deposit(total_excl_tax: Decimal, percentage: Decimal) -> Decimal {
    round_half_up(percent_of(total_excl_tax, percentage), 2)
}

/// `percent` % of `amount`. Never exceeds `amount` in magnitude for
/// percentages up to 100; larger products saturate.
fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount.saturating_mul(percent / dec!(100))
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::ClientProfile;

    #[test]
    fn french_individual() {
        let client = ClientRecord::from_profile(1, ClientProfile::new("A", "B", "a@b.fr"));
        let r = compute_amounts(dec!(100), Some(&client));
        assert_eq!(r.total_excl_tax, dec!(100.00));
        assert_eq!(r.tax_rate, dec!(20));
        assert_eq!(r.tax_amount, dec!(20.00));
        assert_eq!(r.total_incl_tax, dec!(120.00));
    }

    #[test]
    fn no_client_charges_no_tax() {
        let r = compute_amounts(dec!(59.99), None);
        assert_eq!(r.tax_rate, Decimal::ZERO);
        assert_eq!(r.tax_amount, Decimal::ZERO);
        assert_eq!(r.total_incl_tax, dec!(59.99));
    }

    #[test]
    fn half_up_rounding() {
        // 0.125 * 20 % = 0.025 → 0.03
        let r = compute_amounts_with_rate(dec!(0.125), dec!(20));
        assert_eq!(r.total_excl_tax, dec!(0.13));
        assert_eq!(r.tax_amount, dec!(0.03));
        assert_eq!(r.total_incl_tax, dec!(0.15));
    }

    #[test]
    fn quebec_rate_has_three_decimals() {
        let r = compute_amounts_with_rate(dec!(1000), dec!(14.975));
        assert_eq!(r.tax_amount, dec!(149.75));
        assert_eq!(r.total_incl_tax, dec!(1149.75));
    }

    #[test]
    fn negative_total_is_passed_through() {
        let r = compute_amounts_with_rate(dec!(-50), dec!(20));
        assert_eq!(r.tax_amount, dec!(-10.00));
        assert_eq!(r.total_incl_tax, dec!(-60.00));
    }

    #[test]
    fn largest_total_does_not_overflow() {
        let r = compute_amounts_with_rate(Decimal::MAX, dec!(20));
        assert_eq!(r.total_excl_tax, Decimal::MAX);
        assert_eq!(r.total_incl_tax, Decimal::MAX);
        assert!(r.tax_amount > Decimal::ZERO);

        let r = compute_amounts_with_rate(Decimal::MIN, dec!(20));
        assert_eq!(r.total_incl_tax, Decimal::MIN);

        let r = compute_amounts_with_rate(Decimal::MAX, dec!(250));
        assert_eq!(r.tax_amount, Decimal::MAX);
    }

    #[test]
    fn deposit_on_largest_total() {
        let deposit = compute_deposit(Decimal::MAX, DEFAULT_DEPOSIT_PERCENTAGE);
        assert!(deposit > Decimal::ZERO);
        assert!(deposit < Decimal::MAX);
        assert_eq!(compute_deposit(Decimal::MAX, dec!(100)), Decimal::MAX);
    }

    #[test]
    fn deposit() {
        assert_eq!(
            compute_deposit(dec!(1234.56), DEFAULT_DEPOSIT_PERCENTAGE),
            dec!(370.37)
        );
        assert_eq!(compute_deposit(dec!(0), dec!(30)), dec!(0));
    }
}
