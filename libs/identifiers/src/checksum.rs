//! Check-digit algorithms.
//!
//! All functions take ASCII bytes whose structure has already been checked
//! by the caller (digits where digits are expected, VIN alphabet for VINs).

/// VIN positional weights. Position 9 holds the check character and
/// carries weight 0.
const VIN_WEIGHTS: [u32; 17] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// 0-based index of the VIN check character.
pub(crate) const VIN_CHECK_POSITION: usize = 8;

fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}

/// Luhn check digit over the first 14 digits of an IMEI.
///
/// Digits at odd 0-based indices are doubled, with 9 subtracted when the
/// product exceeds 9.
pub(crate) fn luhn_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .take(14)
        .enumerate()
        .map(|(i, &b)| {
            let d = digit(b);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// VIN transliteration value. `I`, `O` and `Q` never reach here.
fn vin_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => digit(b),
        b'A' | b'J' => 1,
        b'B' | b'K' | b'S' => 2,
        b'C' | b'L' | b'T' => 3,
        b'D' | b'M' | b'U' => 4,
        b'E' | b'N' | b'V' => 5,
        b'F' | b'W' => 6,
        b'G' | b'P' | b'X' => 7,
        b'H' | b'Y' => 8,
        b'R' | b'Z' => 9,
        _ => 0,
    }
}

/// Expected check character for a 17-character VIN.
pub(crate) fn vin_check_char(vin: &[u8]) -> u8 {
    let sum: u32 = vin
        .iter()
        .zip(VIN_WEIGHTS)
        .map(|(&b, weight)| vin_value(b) * weight)
        .sum();

    match sum % 11 {
        10 => b'X',
        remainder => b'0' + remainder as u8,
    }
}

/// ISBN-10: weighted sum (10 down to 2) plus the trailing digit or `X`,
/// valid when divisible by 11.
pub(crate) fn isbn10_is_valid(isbn: &[u8]) -> bool {
    let body: u32 = isbn
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, &b)| digit(b) * (10 - i as u32))
        .sum();
    let last = match isbn[9] {
        b'X' => 10,
        b => digit(b),
    };

    (body + last) % 11 == 0
}

/// ISBN-13 (EAN-13) check digit over the first 12 digits, weights 1 and 3.
pub(crate) fn isbn13_check_digit(isbn: &[u8]) -> u8 {
    let sum: u32 = isbn
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, &b)| digit(b) * if i % 2 == 0 { 1 } else { 3 })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luhn_known_imeis() {
        assert_eq!(luhn_check_digit(b"490154203237518"), 8);
        assert_eq!(luhn_check_digit(b"356938035643809"), 9);
    }

    #[test]
    fn test_luhn_all_zero() {
        assert_eq!(luhn_check_digit(b"000000000000000"), 0);
    }

    #[test]
    fn test_vin_check_char_x() {
        assert_eq!(vin_check_char(b"1M8GDM9AXKP042788"), b'X');
    }

    #[test]
    fn test_vin_check_position_ignored() {
        // Weight 0 at the check position: its content cannot affect the sum.
        assert_eq!(
            vin_check_char(b"1M8GDM9A0KP042788"),
            vin_check_char(b"1M8GDM9AZKP042788")
        );
    }

    #[test]
    fn test_vin_transliteration_table() {
        let expected = [
            (b'A', 1),
            (b'H', 8),
            (b'J', 1),
            (b'N', 5),
            (b'P', 7),
            (b'R', 9),
            (b'S', 2),
            (b'Z', 9),
            (b'7', 7),
        ];
        for (b, value) in expected {
            assert_eq!(vin_value(b), value, "value of {}", b as char);
        }
    }

    #[test]
    fn test_isbn10() {
        assert!(isbn10_is_valid(b"0306406152"));
        assert!(isbn10_is_valid(b"080442957X"));
        assert!(!isbn10_is_valid(b"0306406153"));
    }

    #[test]
    fn test_isbn13() {
        assert_eq!(isbn13_check_digit(b"9780306406157"), 7);
    }
}
