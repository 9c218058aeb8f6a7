//! Offline format checks for client VAT numbers and business identifiers.
//!
//! Used when a business client is entered, before asking whether it is
//! VAT-registered. Registration is not verified against any registry.
//!
//! # Example
//!
//! ```
//! use artisanflow::vat::*;
//!
//! let check = check_vat_number("CHE-123.456.789 TVA", "CH").unwrap();
//! assert_eq!(check.status, VatNumberStatus::FormatValid);
//! assert!(check_vat_number("GB12345", "GB").is_err());
//! ```

mod format;

pub use format::{
    VatFormatError, VatNumberCheck, VatNumberStatus, check_vat_number, validate_uk_company_number,
};
