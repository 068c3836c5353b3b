//! Per-kind validators and the dispatching entry point.
//!
//! Each sub-validator canonicalizes its input, checks structure, then the
//! check digit where the kind defines one. Sub-validators do not apply the
//! "ID is required" rule; only [`validate`] does.

use crate::checksum::{
    isbn10_is_valid, isbn13_check_digit, luhn_check_digit, vin_check_char, VIN_CHECK_POSITION,
};
use crate::mask::mask_suffix;
use crate::{IdentifierError, IdentifierKind, ValidatedId, ValidationResult};

const IMEI_LEN: usize = 15;
const IMEI_VISIBLE: usize = 8;
const VIN_LEN: usize = 17;
const MAC_LEN: usize = 12;
const SERIAL_MIN_LEN: usize = 5;
const SERIAL_MAX_LEN: usize = 30;
const DEFAULT_VISIBLE: usize = 6;
const SHORT_SERIAL_VISIBLE: usize = 3;

fn strip(value: &str, separator: impl Fn(char) -> bool) -> String {
    value.chars().filter(|&c| !separator(c)).collect()
}

fn is_space_or_dash(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

fn is_vin_char(b: u8) -> bool {
    matches!(b, b'A'..=b'H' | b'J'..=b'N' | b'P' | b'R'..=b'Z' | b'0'..=b'9')
}

/// Validates `value` as an identifier of `kind`.
///
/// Never panics and never fails: an unusable identifier is reported as
/// [`ValidationResult::Invalid`].
pub fn validate(value: &str, kind: IdentifierKind) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::Invalid(IdentifierError::Required);
    }

    match kind {
        IdentifierKind::Imei => validate_imei(value),
        IdentifierKind::Vin => validate_vin(value),
        IdentifierKind::Isbn => validate_isbn(value),
        IdentifierKind::Mac => validate_mac(value),
        IdentifierKind::Serial => validate_serial(value),
    }
}

/// Validates `value` under a caller-supplied kind tag.
///
/// An absent tag means `serial`; unknown tags fall back to `serial` as well.
pub fn validate_tagged(value: &str, tag: Option<&str>) -> ValidationResult {
    validate(value, IdentifierKind::from(tag))
}

/// IMEI: 15 digits with a Luhn check digit.
pub fn validate_imei(value: &str) -> ValidationResult {
    let cleaned = strip(value, is_space_or_dash);
    let bytes = cleaned.as_bytes();

    if bytes.len() != IMEI_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return ValidationResult::Invalid(IdentifierError::ImeiFormat);
    }

    if luhn_check_digit(bytes) != bytes[IMEI_LEN - 1] - b'0' {
        return ValidationResult::Invalid(IdentifierError::ImeiChecksum);
    }

    // Shows 8 of 15 digits.
    let masked = mask_suffix(&cleaned, IMEI_VISIBLE);
    ValidationResult::Valid(ValidatedId::new(IdentifierKind::Imei, cleaned, masked))
}

/// VIN: 17 characters from the VIN alphabet with a check character at
/// position 9.
pub fn validate_vin(value: &str) -> ValidationResult {
    let cleaned = strip(&value.to_uppercase(), is_space_or_dash);

    if cleaned.chars().count() != VIN_LEN {
        return ValidationResult::Invalid(IdentifierError::VinLength);
    }

    if cleaned.contains(['I', 'O', 'Q']) {
        return ValidationResult::Invalid(IdentifierError::VinForbiddenLetter);
    }

    let bytes = cleaned.as_bytes();
    if bytes.len() != VIN_LEN || !bytes.iter().copied().all(is_vin_char) {
        return ValidationResult::Invalid(IdentifierError::VinCharset);
    }

    if bytes[VIN_CHECK_POSITION] != vin_check_char(bytes) {
        return ValidationResult::Invalid(IdentifierError::VinCheckDigit);
    }

    let masked = mask_suffix(&cleaned, DEFAULT_VISIBLE);
    ValidationResult::Valid(ValidatedId::new(IdentifierKind::Vin, cleaned, masked))
}

/// ISBN-10 or ISBN-13, chosen by length.
pub fn validate_isbn(value: &str) -> ValidationResult {
    let cleaned = strip(value, is_space_or_dash);

    let outcome = match cleaned.chars().count() {
        10 => check_isbn10(cleaned.as_bytes()),
        13 => check_isbn13(cleaned.as_bytes()),
        _ => Err(IdentifierError::IsbnLength),
    };

    if let Err(err) = outcome {
        return ValidationResult::Invalid(err);
    }

    let masked = mask_suffix(&cleaned, DEFAULT_VISIBLE);
    ValidationResult::Valid(ValidatedId::new(IdentifierKind::Isbn, cleaned, masked))
}

fn check_isbn10(bytes: &[u8]) -> Result<(), IdentifierError> {
    let well_formed = bytes.len() == 10
        && bytes[..9].iter().all(u8::is_ascii_digit)
        && (bytes[9].is_ascii_digit() || bytes[9] == b'X');
    if !well_formed {
        return Err(IdentifierError::Isbn10Format);
    }

    if !isbn10_is_valid(bytes) {
        return Err(IdentifierError::Isbn10Checksum);
    }
    Ok(())
}

fn check_isbn13(bytes: &[u8]) -> Result<(), IdentifierError> {
    if bytes.len() != 13 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(IdentifierError::Isbn13Format);
    }

    if isbn13_check_digit(bytes) != bytes[12] - b'0' {
        return Err(IdentifierError::Isbn13Checksum);
    }
    Ok(())
}

/// MAC address: 12 hex characters, any of the usual separators.
///
/// There is no check digit; structural validity is full validity.
pub fn validate_mac(value: &str) -> ValidationResult {
    let cleaned = strip(value, |c| is_space_or_dash(c) || c == ':').to_uppercase();
    let bytes = cleaned.as_bytes();

    if bytes.len() != MAC_LEN || !bytes.iter().all(u8::is_ascii_hexdigit) {
        return ValidationResult::Invalid(IdentifierError::MacFormat);
    }

    let formatted = bytes
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(":");

    let masked = mask_suffix(&cleaned, DEFAULT_VISIBLE);
    ValidationResult::Valid(
        ValidatedId::new(IdentifierKind::Mac, cleaned, masked).with_formatted(formatted),
    )
}

/// Generic serial number, SKU, or any identifier of unrecognized kind.
pub fn validate_serial(value: &str) -> ValidationResult {
    let cleaned = strip(value, char::is_whitespace).to_uppercase();
    let len = cleaned.chars().count();

    if len < SERIAL_MIN_LEN {
        return ValidationResult::Invalid(IdentifierError::SerialTooShort);
    }
    if len > SERIAL_MAX_LEN {
        return ValidationResult::Invalid(IdentifierError::SerialTooLong);
    }

    if !cleaned
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return ValidationResult::Invalid(IdentifierError::SerialCharset);
    }

    let visible = if len > DEFAULT_VISIBLE {
        DEFAULT_VISIBLE
    } else {
        SHORT_SERIAL_VISIBLE
    };
    let masked = mask_suffix(&cleaned, visible);
    ValidationResult::Valid(ValidatedId::new(IdentifierKind::Serial, cleaned, masked))
}
