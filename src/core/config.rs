use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amounts::DEFAULT_DEPOSIT_PERCENTAGE;
use super::countries::{DEFAULT_COUNTRY, is_known_country_code};
use super::currencies::{Currency, currency_for_country};
use super::error::{ArtisanError, ValidationError};

/// The artisan's own VAT status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatStatus {
    /// Charges VAT on invoices.
    #[default]
    #[serde(alias = "assujetti")]
    Registered,
    /// Not registered (franchise en base): no VAT on invoices.
    #[serde(alias = "non_assujetti")]
    NotRegistered,
    /// Invoices EU business clients with reverse charge.
    #[serde(alias = "intracommunautaire")]
    IntraCommunity,
}

/// Artisan settings captured during onboarding.
///
/// Older persisted values use the French field names (`tauxHoraire`,
/// `margeMateriaux`, `tvaStatus`, `configCompleted`); both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanConfig {
    /// ISO 3166-1 alpha-2 code; drives the artisan currency.
    #[serde(default = "default_country")]
    pub country: String,
    /// Hourly rate excluding tax.
    #[serde(default, alias = "tauxHoraire")]
    pub hourly_rate: Option<Decimal>,
    /// Margin applied on materials, in percent.
    #[serde(default, alias = "margeMateriaux")]
    pub materials_margin: Option<Decimal>,
    #[serde(default, alias = "tvaStatus")]
    pub vat_status: VatStatus,
    #[serde(default = "default_deposit_percentage")]
    pub deposit_percentage: Decimal,
    #[serde(default, alias = "configCompleted")]
    pub completed: bool,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

fn default_deposit_percentage() -> Decimal {
    DEFAULT_DEPOSIT_PERCENTAGE
}

impl Default for ArtisanConfig {
    fn default() -> Self {
        Self {
            country: default_country(),
            hourly_rate: None,
            materials_margin: None,
            vat_status: VatStatus::default(),
            deposit_percentage: DEFAULT_DEPOSIT_PERCENTAGE,
            completed: false,
        }
    }
}

impl ArtisanConfig {
    /// Currency shown on every amount, following [`Self::country`].
    pub fn currency(&self) -> &'static Currency {
        currency_for_country(&self.country)
    }

    /// Check the onboarding form rules. Returns all errors found.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !is_known_country_code(&self.country) {
            errors.push(ValidationError::new(
                "country",
                format!(
                    "'{}' is not an ISO 3166-1 alpha-2 country code",
                    self.country
                ),
            ));
        }

        match self.hourly_rate {
            Some(rate) if rate > Decimal::ZERO => {}
            _ => errors.push(ValidationError::new(
                "hourly_rate",
                "hourly rate must be set and greater than zero",
            )),
        }

        match self.materials_margin {
            Some(margin) if margin >= Decimal::ZERO => {}
            _ => errors.push(ValidationError::new(
                "materials_margin",
                "materials margin must be set and not negative",
            )),
        }

        if self.deposit_percentage < Decimal::ZERO || self.deposit_percentage > Decimal::ONE_HUNDRED
        {
            errors.push(ValidationError::new(
                "deposit_percentage",
                "deposit percentage must be between 0 and 100",
            ));
        }

        errors
    }

    /// [`Self::validate`] folded into one [`ArtisanError::Validation`].
    pub fn ensure_valid(&self) -> Result<(), ArtisanError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }
}
