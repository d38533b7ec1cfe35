//! Coefficient alphabets for sparse challenge polynomials

/// Maps raw bits drawn from the sign/magnitude word onto a signed coefficient.
///
/// `BITS` raw bits are consumed per attempt, low bits first. `map` returns
/// `None` when the raw value must be discarded and a fresh one drawn; it must
/// never return `Some(0)`, otherwise the sampler could not guarantee the
/// requested Hamming weight.
pub trait CoefficientAlphabet {
    /// Alphabet identifier
    const NAME: &'static str;

    /// Raw bits consumed per draw (1..=8)
    const BITS: u32;

    /// Allowed non-zero magnitudes, ascending
    const MAGNITUDES: &'static [u8];

    /// Map `raw` (only the low `BITS` bits are set) to a coefficient
    fn map(raw: u8) -> Option<i8>;

    /// Largest magnitude in the alphabet
    fn max_magnitude() -> u8 {
        Self::MAGNITUDES.last().copied().unwrap_or(0)
    }

    /// True when `value` is a non-zero member of the alphabet
    fn contains(value: i8) -> bool {
        value != 0 && Self::MAGNITUDES.contains(&value.unsigned_abs())
    }
}
