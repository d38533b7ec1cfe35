//! Coefficient alphabets

use dchallenge_api::CoefficientAlphabet;

/// {-1, 1}: one bit per coefficient, 0 maps to +1 and 1 to -1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ternary;

impl CoefficientAlphabet for Ternary {
    const NAME: &'static str = "ternary";
    const BITS: u32 = 1;
    const MAGNITUDES: &'static [u8] = &[1];

    #[inline(always)]
    fn map(raw: u8) -> Option<i8> {
        Some(1 - 2 * (raw & 1) as i8)
    }
}

/// {-2, -1, 1, 2} through `(raw % 5) - 2` on three bits.
///
/// Raw values 2 and 7 land on zero and are redrawn. The remaining six values
/// split as -2: {0, 5}, -1: {1, 6}, 1: {3}, 2: {4}, so negative coefficients
/// come out twice as often as positive ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandedModFive;

impl CoefficientAlphabet for ExpandedModFive {
    const NAME: &'static str = "expanded-mod-five";
    const BITS: u32 = 3;
    const MAGNITUDES: &'static [u8] = &[1, 2];

    #[inline(always)]
    fn map(raw: u8) -> Option<i8> {
        match (raw & 7) % 5 {
            2 => None,
            v => Some(v as i8 - 2),
        }
    }
}

/// {-2, -1, 1, 2} uniformly: three bits, only 0, 1, 3 and 4 are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandedUniform;

impl CoefficientAlphabet for ExpandedUniform {
    const NAME: &'static str = "expanded-uniform";
    const BITS: u32 = 3;
    const MAGNITUDES: &'static [u8] = &[1, 2];

    #[inline(always)]
    fn map(raw: u8) -> Option<i8> {
        match raw & 7 {
            v @ (0 | 1 | 3 | 4) => Some(v as i8 - 2),
            _ => None,
        }
    }
}
