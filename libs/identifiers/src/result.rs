//! Validation outcome and its wire representation.

use serde::{Serialize, Serializer};

use crate::{IdentifierError, IdentifierKind};

/// An identifier that passed validation, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedId {
    kind: IdentifierKind,
    cleaned: String,
    masked: String,
    formatted: Option<String>,
}

impl ValidatedId {
    pub(crate) fn new(kind: IdentifierKind, cleaned: String, masked: String) -> Self {
        Self {
            kind,
            cleaned,
            masked,
            formatted: None,
        }
    }

    pub(crate) fn with_formatted(mut self, formatted: String) -> Self {
        self.formatted = Some(formatted);
        self
    }

    /// The kind the identifier was validated as.
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Canonical form: separators stripped, uppercased where the kind
    /// requires it. This is the value to store and compare.
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// Display-safe form exposing only a short suffix.
    pub fn masked(&self) -> &str {
        &self.masked
    }

    /// Conventional grouped presentation, currently only for MAC addresses.
    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    pub fn into_cleaned(self) -> String {
        self.cleaned
    }
}

/// Outcome of validating one raw identifier.
///
/// Serializes to the flat shape the listing API returns:
///
/// ```json
/// { "valid": true, "cleaned": "AABBCCDDEEFF", "masked": "***DDEEFF", "formatted": "AA:BB:CC:DD:EE:FF" }
/// { "valid": false, "error": "Invalid IMEI checksum" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(ValidatedId),
    Invalid(IdentifierError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn cleaned(&self) -> Option<&str> {
        self.as_valid().map(ValidatedId::cleaned)
    }

    pub fn masked(&self) -> Option<&str> {
        self.as_valid().map(ValidatedId::masked)
    }

    pub fn formatted(&self) -> Option<&str> {
        self.as_valid().and_then(ValidatedId::formatted)
    }

    pub fn error(&self) -> Option<IdentifierError> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(err) => Some(*err),
        }
    }

    pub fn as_valid(&self) -> Option<&ValidatedId> {
        match self {
            ValidationResult::Valid(id) => Some(id),
            ValidationResult::Invalid(_) => None,
        }
    }

    /// Converts into a `Result`, for callers that want `?` propagation.
    pub fn into_result(self) -> Result<ValidatedId, IdentifierError> {
        match self {
            ValidationResult::Valid(id) => Ok(id),
            ValidationResult::Invalid(err) => Err(err),
        }
    }
}

impl From<Result<ValidatedId, IdentifierError>> for ValidationResult {
    fn from(result: Result<ValidatedId, IdentifierError>) -> Self {
        match result {
            Ok(id) => ValidationResult::Valid(id),
            Err(err) => ValidationResult::Invalid(err),
        }
    }
}

#[derive(Serialize)]
struct WireResult<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cleaned: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = WireResult {
            valid: self.is_valid(),
            cleaned: self.cleaned(),
            masked: self.masked(),
            formatted: self.formatted(),
            error: self.error().map(|e| e.to_string()),
        };
        wire.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_wire_shape() {
        let result = ValidationResult::Valid(ValidatedId::new(
            IdentifierKind::Serial,
            "ABCDE12345".to_string(),
            "***E12345".to_string(),
        ));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "valid": true, "cleaned": "ABCDE12345", "masked": "***E12345" })
        );
    }

    #[test]
    fn test_invalid_wire_shape() {
        let result = ValidationResult::Invalid(IdentifierError::ImeiChecksum);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "valid": false, "error": "Invalid IMEI checksum" })
        );
    }

    #[test]
    fn test_formatted_only_when_set() {
        let id = ValidatedId::new(
            IdentifierKind::Mac,
            "AABBCCDDEEFF".to_string(),
            "***DDEEFF".to_string(),
        )
        .with_formatted("AA:BB:CC:DD:EE:FF".to_string());
        let value = serde_json::to_value(ValidationResult::Valid(id)).unwrap();
        assert_eq!(value["formatted"], "AA:BB:CC:DD:EE:FF");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_into_result() {
        let result = ValidationResult::Invalid(IdentifierError::Required);
        assert_eq!(result.into_result(), Err(IdentifierError::Required));
    }

    #[test]
    fn test_from_result() {
        let id = ValidatedId::new(
            IdentifierKind::Vin,
            "1HGCM82633A004352".to_string(),
            "***004352".to_string(),
        );
        let valid = ValidationResult::from(Ok(id.clone()));
        assert_eq!(valid.as_valid(), Some(&id));

        let invalid = ValidationResult::from(Err(IdentifierError::VinCheckDigit));
        assert_eq!(invalid.error(), Some(IdentifierError::VinCheckDigit));
        assert!(invalid.masked().is_none());
    }
}
