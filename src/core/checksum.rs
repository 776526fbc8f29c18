//! Check-digit verification for CPF and CNPJ numbers.
//!
//! Both schemes append two check digits derived from the preceding digits
//! by a weighted mod-11 sum. The second digit's sum includes the first, so
//! verification is sequential and short-circuits on the first mismatch.

use serde::{Deserialize, Serialize};

/// Identifier class: selects the expected length and check-digit scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdKind {
    /// CPF — individual taxpayer number, 11 digits.
    Cpf,
    /// CNPJ — legal-entity taxpayer number, 14 digits.
    Cnpj,
}

impl IdKind {
    /// Number of digits in a complete identifier of this class.
    pub const fn digit_count(self) -> usize {
        match self {
            IdKind::Cpf => 11,
            IdKind::Cnpj => 14,
        }
    }
}

/// Validate a CPF or CNPJ by checksum.
///
/// Strips every non-digit character first, so both masked
/// ("111.444.777-35") and bare ("11144477735") inputs are accepted.
/// Returns `false` — never an error — when the cleaned input has the
/// wrong length, consists of a single repeated digit (such sequences are
/// never assigned, whatever their checksum says), or fails either check
/// digit.
pub fn validate(raw: &str, kind: IdKind) -> bool {
    digits_valid(&clean_digits(raw), kind)
}

/// Shorthand for [`validate`] with [`IdKind::Cpf`].
pub fn is_valid_cpf(raw: &str) -> bool {
    validate(raw, IdKind::Cpf)
}

/// Shorthand for [`validate`] with [`IdKind::Cnpj`].
pub fn is_valid_cnpj(raw: &str) -> bool {
    validate(raw, IdKind::Cnpj)
}

/// Strip formatting and map ASCII digits to their values.
pub(crate) fn clean_digits(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Checksum verification over already-cleaned digit values.
pub(crate) fn digits_valid(digits: &[u8], kind: IdKind) -> bool {
    if digits.len() != kind.digit_count() {
        return false;
    }
    // Repeated-digit sequences (000..., 111...) are reserved, never issued.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }
    match kind {
        IdKind::Cpf => {
            digits[9] == cpf_check_digit(&digits[..9])
                && digits[10] == cpf_check_digit(&digits[..10])
        }
        IdKind::Cnpj => {
            digits[12] == cnpj_check_digit(&digits[..12], &CNPJ_WEIGHTS_1)
                && digits[13] == cnpj_check_digit(&digits[..13], &CNPJ_WEIGHTS_2)
        }
    }
}

/// CPF check digit over the first 9 (first digit) or 10 (second digit)
/// positions. Position i is weighted by `len + 1 - i`, i.e. 10..=2 for the
/// first digit and 11..=2 for the second.
fn cpf_check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    let r = (sum * 10) % 11;
    if r >= 10 { 0 } else { r as u8 }
}

const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn cnpj_check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    let r = sum % 11;
    if r < 2 { 0 } else { (11 - r) as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- CPF ---

    #[test]
    fn valid_cpf_bare() {
        assert!(validate("11144477735", IdKind::Cpf));
    }

    #[test]
    fn valid_cpf_masked() {
        assert!(validate("111.444.777-35", IdKind::Cpf));
    }

    #[test]
    fn cpf_wrong_first_check_digit() {
        assert!(!validate("11144477745", IdKind::Cpf));
    }

    #[test]
    fn cpf_wrong_second_check_digit() {
        assert!(!validate("11144477736", IdKind::Cpf));
    }

    #[test]
    fn cpf_wrong_length() {
        assert!(!validate("1114447773", IdKind::Cpf));
        assert!(!validate("111444777350", IdKind::Cpf));
        assert!(!validate("", IdKind::Cpf));
    }

    #[test]
    fn cpf_repeated_digits_rejected() {
        for d in 0..=9 {
            let s = d.to_string().repeat(11);
            assert!(!validate(&s, IdKind::Cpf), "{s} must be invalid");
        }
    }

    #[test]
    fn cpf_check_digit_values() {
        let prefix = [1, 1, 1, 4, 4, 4, 7, 7, 7];
        assert_eq!(cpf_check_digit(&prefix), 3);
        let with_first = [1, 1, 1, 4, 4, 4, 7, 7, 7, 3];
        assert_eq!(cpf_check_digit(&with_first), 5);
    }

    // --- CNPJ ---

    #[test]
    fn valid_cnpj_bare() {
        assert!(validate("11444777000161", IdKind::Cnpj));
    }

    #[test]
    fn valid_cnpj_masked() {
        assert!(validate("11.444.777/0001-61", IdKind::Cnpj));
    }

    #[test]
    fn cnpj_wrong_check_digits() {
        assert!(!validate("11444777000151", IdKind::Cnpj));
        assert!(!validate("11444777000160", IdKind::Cnpj));
    }

    #[test]
    fn cnpj_wrong_length() {
        assert!(!validate("1144477700016", IdKind::Cnpj));
        assert!(!validate("114447770001610", IdKind::Cnpj));
    }

    #[test]
    fn cnpj_repeated_digits_rejected() {
        for d in 0..=9 {
            let s = d.to_string().repeat(14);
            assert!(!validate(&s, IdKind::Cnpj), "{s} must be invalid");
        }
    }

    #[test]
    fn kind_digit_counts() {
        assert_eq!(IdKind::Cpf.digit_count(), 11);
        assert_eq!(IdKind::Cnpj.digit_count(), 14);
    }

    #[test]
    fn shorthand_wrappers() {
        assert!(is_valid_cpf("111.444.777-35"));
        assert!(is_valid_cnpj("11.444.777/0001-61"));
        assert!(!is_valid_cpf("11.444.777/0001-61"));
        assert!(!is_valid_cnpj("111.444.777-35"));
    }
}
