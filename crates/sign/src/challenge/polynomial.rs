//! Sparse challenge polynomial and coefficient statistics

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};

/// Sparse polynomial with small signed coefficients.
///
/// Produced only by the sampler, so the weight and alphabet invariants hold
/// for every value of this type. Coefficients are stored in index order.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChallengePolynomial {
    coeffs: Vec<i8>,
}

impl ChallengePolynomial {
    pub(crate) fn from_coeffs(coeffs: Vec<i8>) -> Self {
        Self { coeffs }
    }

    /// Coefficients in index order
    pub fn coeffs(&self) -> &[i8] {
        &self.coeffs
    }

    /// Coefficient at `index`, if in range
    pub fn get(&self, index: usize) -> Option<i8> {
        self.coeffs.get(index).copied()
    }

    /// Number of coefficients (the ring degree)
    pub fn ring_degree(&self) -> usize {
        self.coeffs.len()
    }

    /// Number of non-zero coefficients
    pub fn weight(&self) -> usize {
        self.coeffs.iter().filter(|&&c| c != 0).count()
    }

    /// Largest absolute coefficient value
    pub fn max_magnitude(&self) -> u8 {
        self.coeffs.iter().map(|c| c.unsigned_abs()).max().unwrap_or(0)
    }

    /// `(index, value)` pairs of the non-zero coefficients, ascending by index
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, i8)> + '_ {
        self.coeffs
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != 0)
            .map(|(i, &c)| (i, c))
    }

    /// Coefficients lifted to `[0, q)`, the form lattice arithmetic consumes
    pub fn to_modular(&self, q: u32) -> Vec<u32> {
        self.coeffs
            .iter()
            .map(|&c| {
                if c < 0 {
                    q - u32::from(c.unsigned_abs())
                } else {
                    c as u32
                }
            })
            .collect()
    }

    /// Coefficient counts for this polynomial
    pub fn histogram(&self) -> CoefficientHistogram {
        let mut histogram = CoefficientHistogram::default();
        histogram.record(self);
        histogram
    }
}

impl ConstantTimeEq for ChallengePolynomial {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.coeffs.as_slice().ct_eq(other.coeffs.as_slice())
    }
}

impl AsRef<[i8]> for ChallengePolynomial {
    fn as_ref(&self) -> &[i8] {
        &self.coeffs
    }
}

impl fmt::Debug for ChallengePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChallengePolynomial")
            .field("ring_degree", &self.ring_degree())
            .field("nonzero", &self.nonzero().collect::<Vec<_>>())
            .finish()
    }
}

/// Counts of each coefficient value in -2..=2 over one or more polynomials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoefficientHistogram {
    counts: [u64; 5],
    polynomials: u64,
}

impl CoefficientHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every coefficient of `poly`
    pub fn record(&mut self, poly: &ChallengePolynomial) {
        for &c in poly.coeffs() {
            if let Some(slot) = Self::slot(c) {
                self.counts[slot] += 1;
            }
        }
        self.polynomials += 1;
    }

    /// Fold another histogram into this one
    pub fn merge(&mut self, other: &CoefficientHistogram) {
        for (a, b) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += b;
        }
        self.polynomials += other.polynomials;
    }

    fn slot(value: i8) -> Option<usize> {
        match value {
            -2..=2 => Some((value + 2) as usize),
            _ => None,
        }
    }

    /// Occurrences of `value`; zero for values outside -2..=2
    pub fn count(&self, value: i8) -> u64 {
        Self::slot(value).map_or(0, |slot| self.counts[slot])
    }

    /// Polynomials recorded
    pub fn polynomials(&self) -> u64 {
        self.polynomials
    }

    pub fn negative(&self) -> u64 {
        self.count(-2) + self.count(-1)
    }

    pub fn positive(&self) -> u64 {
        self.count(1) + self.count(2)
    }

    /// All non-zero coefficients
    pub fn nonzero(&self) -> u64 {
        self.negative() + self.positive()
    }

    /// Non-zero coefficients with magnitude 2
    pub fn magnitude_two(&self) -> u64 {
        self.count(-2) + self.count(2)
    }
}

impl fmt::Display for CoefficientHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-2: {}, -1: {}, 0: {}, 1: {}, 2: {} over {} polynomials",
            self.counts[0],
            self.counts[1],
            self.counts[2],
            self.counts[3],
            self.counts[4],
            self.polynomials
        )
    }
}
