//! Identifier kinds and their entry guidance.

use serde::{Deserialize, Serialize};

/// The declared kind of a unique identifier.
///
/// Tags parse leniently: matching is case-insensitive, and anything that is
/// not a known tag (including `sku`, `none`, and the empty string) maps to
/// [`IdentifierKind::Serial`]. A caller can never fail just by omitting or
/// misspelling the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum IdentifierKind {
    /// International Mobile Equipment Identity.
    Imei,
    /// Vehicle Identification Number.
    Vin,
    /// International Standard Book Number (10 or 13).
    Isbn,
    /// Hardware MAC address.
    Mac,
    /// Manufacturer serial number, SKU, or any unrecognized kind.
    #[default]
    Serial,
}

/// Guidance shown to a seller entering an identifier of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindInfo {
    pub kind: IdentifierKind,
    pub label: &'static str,
    /// Where to find the identifier on the product.
    pub hint: &'static str,
    /// Longest raw input worth accepting in an entry form.
    pub max_input_length: usize,
    /// A value that validates under this kind.
    pub example: &'static str,
}

impl IdentifierKind {
    /// Every kind, in catalog order.
    pub const ALL: [IdentifierKind; 5] = [
        IdentifierKind::Imei,
        IdentifierKind::Vin,
        IdentifierKind::Isbn,
        IdentifierKind::Mac,
        IdentifierKind::Serial,
    ];

    /// Resolves a caller-supplied tag, falling back to `Serial`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "imei" => IdentifierKind::Imei,
            "vin" => IdentifierKind::Vin,
            "isbn" => IdentifierKind::Isbn,
            "mac" => IdentifierKind::Mac,
            _ => IdentifierKind::Serial,
        }
    }

    /// The canonical lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Imei => "imei",
            IdentifierKind::Vin => "vin",
            IdentifierKind::Isbn => "isbn",
            IdentifierKind::Mac => "mac",
            IdentifierKind::Serial => "serial",
        }
    }

    pub fn info(&self) -> KindInfo {
        let (label, hint, max_input_length, example) = match self {
            IdentifierKind::Imei => (
                "IMEI Number",
                "Dial *#06# on your phone to see it",
                15,
                "490154203237518",
            ),
            IdentifierKind::Vin => (
                "VIN (Vehicle Identification Number)",
                "Check dashboard or door sticker",
                17,
                "1M8GDM9AXKP042788",
            ),
            IdentifierKind::Isbn => ("ISBN", "Check the back cover", 13, "9780306406157"),
            IdentifierKind::Mac => (
                "MAC Address",
                "Check network settings or the device label",
                17,
                "AA:BB:CC:DD:EE:FF",
            ),
            IdentifierKind::Serial => (
                "Serial Number",
                "Check product label or settings",
                30,
                "ABCDE12345",
            ),
        };

        KindInfo {
            kind: *self,
            label,
            hint,
            max_input_length,
            example,
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for IdentifierKind {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for IdentifierKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<Option<&str>> for IdentifierKind {
    fn from(tag: Option<&str>) -> Self {
        tag.map(Self::from_tag).unwrap_or_default()
    }
}
