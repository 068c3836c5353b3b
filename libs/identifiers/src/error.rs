//! Reasons an identifier can be rejected.

use thiserror::Error;

/// Why an identifier failed validation.
///
/// The `Display` text of each variant is the user-facing message returned
/// on the wire in the `error` field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierError {
    /// The value was empty or whitespace-only.
    #[error("ID is required")]
    Required,

    #[error("IMEI must be exactly 15 digits")]
    ImeiFormat,

    #[error("Invalid IMEI checksum")]
    ImeiChecksum,

    #[error("VIN must be exactly 17 characters")]
    VinLength,

    /// The VIN contains `I`, `O`, or `Q`, which the standard excludes.
    #[error("VIN cannot contain letters I, O, or Q")]
    VinForbiddenLetter,

    #[error("VIN must be alphanumeric (no I, O, Q)")]
    VinCharset,

    #[error("Invalid VIN check digit")]
    VinCheckDigit,

    #[error("Invalid ISBN-10 format")]
    Isbn10Format,

    #[error("Invalid ISBN-10 checksum")]
    Isbn10Checksum,

    #[error("Invalid ISBN-13 format")]
    Isbn13Format,

    #[error("Invalid ISBN-13 checksum")]
    Isbn13Checksum,

    #[error("ISBN must be 10 or 13 digits")]
    IsbnLength,

    #[error("MAC address must be 12 hexadecimal characters")]
    MacFormat,

    #[error("Serial number too short")]
    SerialTooShort,

    #[error("Serial number too long")]
    SerialTooLong,

    #[error("Serial number must be alphanumeric")]
    SerialCharset,
}

impl IdentifierError {
    /// Stable machine-readable code, suitable for logs and metrics labels.
    pub fn code(&self) -> &'static str {
        match self {
            IdentifierError::Required => "required",
            IdentifierError::ImeiFormat => "imei_format",
            IdentifierError::ImeiChecksum => "imei_checksum",
            IdentifierError::VinLength => "vin_length",
            IdentifierError::VinForbiddenLetter => "vin_forbidden_letter",
            IdentifierError::VinCharset => "vin_charset",
            IdentifierError::VinCheckDigit => "vin_check_digit",
            IdentifierError::Isbn10Format => "isbn10_format",
            IdentifierError::Isbn10Checksum => "isbn10_checksum",
            IdentifierError::Isbn13Format => "isbn13_format",
            IdentifierError::Isbn13Checksum => "isbn13_checksum",
            IdentifierError::IsbnLength => "isbn_length",
            IdentifierError::MacFormat => "mac_format",
            IdentifierError::SerialTooShort => "serial_too_short",
            IdentifierError::SerialTooLong => "serial_too_long",
            IdentifierError::SerialCharset => "serial_charset",
        }
    }

    /// Returns true if the identifier was well-formed but its check digit
    /// did not match.
    pub fn is_checksum_error(&self) -> bool {
        matches!(
            self,
            IdentifierError::ImeiChecksum
                | IdentifierError::VinCheckDigit
                | IdentifierError::Isbn10Checksum
                | IdentifierError::Isbn13Checksum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message() {
        assert_eq!(IdentifierError::Required.to_string(), "ID is required");
    }

    #[test]
    fn test_checksum_classification() {
        assert!(IdentifierError::ImeiChecksum.is_checksum_error());
        assert!(IdentifierError::Isbn13Checksum.is_checksum_error());
        assert!(!IdentifierError::VinForbiddenLetter.is_checksum_error());
        assert!(!IdentifierError::Required.is_checksum_error());
    }

    #[test]
    fn test_codes_unique() {
        let all = [
            IdentifierError::Required,
            IdentifierError::ImeiFormat,
            IdentifierError::ImeiChecksum,
            IdentifierError::VinLength,
            IdentifierError::VinForbiddenLetter,
            IdentifierError::VinCharset,
            IdentifierError::VinCheckDigit,
            IdentifierError::Isbn10Format,
            IdentifierError::Isbn10Checksum,
            IdentifierError::Isbn13Format,
            IdentifierError::Isbn13Checksum,
            IdentifierError::IsbnLength,
            IdentifierError::MacFormat,
            IdentifierError::SerialTooShort,
            IdentifierError::SerialTooLong,
            IdentifierError::SerialCharset,
        ];
        let unique: std::collections::HashSet<_> = all.iter().map(|e| e.code()).collect();
        assert_eq!(all.len(), unique.len(), "Duplicate error codes found!");
    }
}
