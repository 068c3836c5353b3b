//! # swapsafe-identifiers
//!
//! Validation, canonicalization, and masking of the unique identifiers
//! that tie a marketplace listing to its "Digital Twin" product identity.
//!
//! ## Design Principles
//!
//! - Validation is a pure function of `(value, kind)`; identical inputs
//!   always produce identical results
//! - Malformed input is never an error of the call itself: failure is a
//!   normal [`ValidationResult::Invalid`] value
//! - Canonical forms are fixed points: validating `cleaned` again under the
//!   same kind yields the same result
//! - Unknown or absent kinds fall back to the generic serial validator
//!
//! ## Supported Kinds
//!
//! | Kind     | Canonical form                 | Check                  |
//! |----------|--------------------------------|------------------------|
//! | `imei`   | 15 digits                      | Luhn                   |
//! | `vin`    | 17 chars, uppercase, no I/O/Q  | weighted mod 11 at pos 9 |
//! | `isbn`   | 10 or 13 chars                 | mod 11 / mod 10        |
//! | `mac`    | 12 uppercase hex chars         | none                   |
//! | `serial` | 5-30 chars `[A-Z0-9_-]`        | none                   |
//!
//! ## Example
//!
//! ```
//! use swapsafe_identifiers::{validate, IdentifierKind};
//!
//! let result = validate("AA:BB:CC:DD:EE:FF", IdentifierKind::Mac);
//! assert!(result.is_valid());
//! assert_eq!(result.cleaned(), Some("AABBCCDDEEFF"));
//! assert_eq!(result.masked(), Some("***DDEEFF"));
//! ```

mod checksum;
mod error;
mod kind;
mod mask;
mod result;
mod validate;

pub use error::IdentifierError;
pub use kind::{IdentifierKind, KindInfo};
pub use mask::REDACTION_MARKER;
pub use result::{ValidatedId, ValidationResult};
pub use validate::{
    validate, validate_imei, validate_isbn, validate_mac, validate_serial, validate_tagged,
    validate_vin,
};
