//! Wildcard search over partially-known CPFs.
//!
//! A pattern is an 11-character CPF with unknown positions marked `*`.
//! Resolution substitutes every digit combination into the unknown
//! positions and keeps the checksum-valid results. With k wildcards that
//! is 10^k candidates — a deliberate full brute force, not capped here;
//! callers who need bounded work consume [`Candidates`] lazily instead of
//! collecting through [`resolve`].

use super::checksum::{IdKind, digits_valid};
use super::error::CadastroError;
use super::types::Cpf;

const CPF_LEN: usize = 11;

/// Lazy iterator over the checksum-valid completions of a masked CPF.
///
/// Candidates are generated in odometer order over the wildcard positions
/// (leftmost wildcard varies slowest), so the output order is the
/// lexicographic order of the substituted digits and is stable across
/// runs. Each `next()` call evaluates at most one full wildcard sweep, so
/// the iterator is a natural seam for early exit or cooperative
/// cancellation between candidates.
#[derive(Debug, Clone)]
pub struct Candidates {
    digits: [u8; CPF_LEN],
    holes: Vec<usize>,
    next: u64,
    total: u64,
}

impl Candidates {
    /// Build the candidate enumeration for a pattern.
    ///
    /// Everything that is neither a digit nor `*` is stripped first, so
    /// masked input ("111.444.777-**") works. Fails with
    /// [`CadastroError::InvalidPatternLength`] when the cleaned pattern is
    /// not exactly 11 characters.
    pub fn new(pattern: &str) -> Result<Self, CadastroError> {
        let cleaned: Vec<u8> = pattern
            .bytes()
            .filter(|&b| b.is_ascii_digit() || b == b'*')
            .collect();
        if cleaned.len() != CPF_LEN {
            return Err(CadastroError::InvalidPatternLength {
                found: cleaned.len(),
            });
        }

        let mut digits = [0u8; CPF_LEN];
        let mut holes = Vec::new();
        for (i, &b) in cleaned.iter().enumerate() {
            if b == b'*' {
                holes.push(i);
            } else {
                digits[i] = b - b'0';
            }
        }

        // k <= 11, so 10^k fits comfortably in u64.
        let total = 10u64.pow(holes.len() as u32);
        Ok(Self {
            digits,
            holes,
            next: 0,
            total,
        })
    }

    /// Number of wildcard positions in the pattern.
    pub fn wildcard_count(&self) -> usize {
        self.holes.len()
    }
}

impl Iterator for Candidates {
    type Item = Cpf;

    fn next(&mut self) -> Option<Cpf> {
        while self.next < self.total {
            let mut n = self.next;
            self.next += 1;

            let mut candidate = self.digits;
            // Decompose the counter base-10, rightmost hole varying fastest.
            for &pos in self.holes.iter().rev() {
                candidate[pos] = (n % 10) as u8;
                n /= 10;
            }
            if digits_valid(&candidate, IdKind::Cpf) {
                return Some(Cpf::from_digits_unchecked(candidate));
            }
        }
        None
    }
}

/// Resolve a masked CPF to every checksum-valid completion.
///
/// Zero-wildcard patterns act as a plain validity check: the result is a
/// singleton if the pattern itself validates, empty otherwise. The result
/// set may be empty but is never truncated; see [`Candidates`] for the
/// enumeration order and cost model.
pub fn resolve(pattern: &str) -> Result<Vec<Cpf>, CadastroError> {
    Ok(Candidates::new(pattern)?.collect())
}
