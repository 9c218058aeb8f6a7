//! # artisanflow
//!
//! Fiscal rules for tradespeople issuing quotes (devis) and invoices:
//! country currency and VAT tables, client classification, VAT rate
//! resolution, tax amount calculation, and a deduplicating client registry
//! persisted in a key-value store.
//!
//! All monetary values and rates use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use artisanflow::core::*;
//! use rust_decimal_macros::dec;
//!
//! let client = ClientRecord::from_profile(
//!     1,
//!     ClientProfile::new("Jean", "Dupont", "jean.dupont@example.com").country("BE"),
//! );
//!
//! let amounts = compute_amounts(dec!(100), Some(&client));
//! assert_eq!(amounts.tax_rate, dec!(21));
//! assert_eq!(amounts.total_incl_tax, dec!(121.00));
//! assert_eq!(currency_for_country("BE").code, "EUR");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Currency and VAT tables, client types, VAT resolver, amounts, artisan config |
//! | `registry` | Key-value stores, persisted client registry, config persistence |
//! | `vat` | Offline VAT / business identifier format checks |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "registry")]
pub mod registry;

#[cfg(feature = "vat")]
pub mod vat;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
