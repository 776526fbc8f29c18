//! Property-based tests for checksum validation and wildcard resolution.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use std::collections::HashSet;

use cadastro::core::*;
use proptest::prelude::*;

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

fn arb_cpf_prefix() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..10, 9)
}

fn arb_cnpj_prefix() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..10, 12)
}

proptest! {
    /// The 9 leading digits of a CPF determine both check digits, so
    /// resolving "<prefix>**" finds exactly one completion — except when
    /// the only arithmetic completion is a repeated-digit sequence, which
    /// the degenerate-value policy rejects.
    #[test]
    fn cpf_check_digits_uniquely_determined(prefix in arb_cpf_prefix()) {
        let s = digits_to_string(&prefix);
        let found = resolve(&format!("{s}**")).unwrap();
        let distinct: HashSet<u8> = prefix.iter().copied().collect();
        if distinct.len() > 1 {
            prop_assert_eq!(found.len(), 1);
            prop_assert!(validate(&found[0].as_digits(), IdKind::Cpf));
            prop_assert!(found[0].as_digits().starts_with(&s));
        } else {
            prop_assert!(found.len() <= 1);
        }
    }

    /// Same uniqueness for CNPJ, with validate() as the only oracle:
    /// of the 100 possible check-digit pairs, at most one verifies.
    #[test]
    fn cnpj_check_digits_uniquely_determined(prefix in arb_cnpj_prefix()) {
        let s = digits_to_string(&prefix);
        let valid_count = (0..100)
            .filter(|n| validate(&format!("{s}{}{}", n / 10, n % 10), IdKind::Cnpj))
            .count();
        let distinct: HashSet<u8> = prefix.iter().copied().collect();
        if distinct.len() > 1 {
            prop_assert_eq!(valid_count, 1);
        } else {
            prop_assert!(valid_count <= 1);
        }
    }

    /// Changing a stored check digit (positions 9-10) of a valid CPF
    /// always invalidates it: the required digit is computed from the
    /// preceding positions, which the mutation leaves untouched.
    ///
    /// Data-position mutations are *not* always detected — the scheme
    /// maps both r = 0 and r = 10 to check digit 0, so two valid CPFs
    /// can differ in a single data digit (e.g. 00000011800 and
    /// 00000211800). That collision is pinned down in checksum_tests.
    #[test]
    fn cpf_check_digit_mutation_detected(
        prefix in arb_cpf_prefix(),
        pos in 9usize..11,
        delta in 1u8..10,
    ) {
        let s = digits_to_string(&prefix);
        let found = resolve(&format!("{s}**")).unwrap();
        prop_assume!(!found.is_empty());

        let valid = found[0].as_digits();
        let mut mutated: Vec<u8> = valid.bytes().map(|b| b - b'0').collect();
        mutated[pos] = (mutated[pos] + delta) % 10;
        prop_assert!(!validate(&digits_to_string(&mutated), IdKind::Cpf));
    }

    #[test]
    fn cnpj_single_digit_mutation_detected(pos in 0usize..14, delta in 1u8..10) {
        let mut digits: Vec<u8> = "11444777000161".bytes().map(|b| b - b'0').collect();
        digits[pos] = (digits[pos] + delta) % 10;
        prop_assert!(!validate(&digits_to_string(&digits), IdKind::Cnpj));
    }

    /// Every resolver output revalidates, and a second run reproduces the
    /// same ordered output.
    #[test]
    fn resolver_outputs_revalidate_and_repeat(
        digits in proptest::collection::vec(0u8..10, 11),
        holes in proptest::collection::hash_set(0usize..11, 0..=3),
    ) {
        let pattern: String = digits
            .iter()
            .enumerate()
            .map(|(i, &d)| if holes.contains(&i) { '*' } else { char::from(b'0' + d) })
            .collect();

        let first = resolve(&pattern).unwrap();
        for cpf in &first {
            prop_assert!(validate(&cpf.as_digits(), IdKind::Cpf));
        }
        let second = resolve(&pattern).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Cleaning is mask-insensitive: interleaving separators anywhere in
    /// a valid CPF never changes the verdict.
    #[test]
    fn cpf_validation_ignores_separators(sep in "[ ./-]{0,3}") {
        let masked = format!("{sep}111{sep}444{sep}777{sep}35{sep}");
        prop_assert!(validate(&masked, IdKind::Cpf));
    }

    /// Repeated-digit sequences are invalid whatever the digit.
    #[test]
    fn degenerate_sequences_rejected(d in 0u8..10) {
        prop_assert!(!validate(&d.to_string().repeat(11), IdKind::Cpf));
        prop_assert!(!validate(&d.to_string().repeat(14), IdKind::Cnpj));
    }
}
