//! Core types with security guarantees for the dchallenge crates

use core::fmt;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::validate;
use crate::Result;

/// Length of a challenge seed (`CTILDEBYTES`) in every supported configuration
pub const SEED_BYTES: usize = 32;

/// Opaque challenge seed.
///
/// Owned by the caller and only ever read by the sampler. Zeroed on drop,
/// compared in constant time, and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    data: [u8; SEED_BYTES],
}

impl Seed {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; SEED_BYTES]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Seed::from_slice", slice.len(), SEED_BYTES)?;

        let mut data = [0u8; SEED_BYTES];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// All-zero seed
    pub fn zeroed() -> Self {
        Self { data: [0u8; SEED_BYTES] }
    }

    /// Generate a random seed
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; SEED_BYTES];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Borrow the raw seed bytes
    pub fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.data
    }

    /// Length of the seed in bytes
    pub fn len(&self) -> usize {
        SEED_BYTES
    }

    /// Always false; present for slice-like ergonomics
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<[u8; SEED_BYTES]> for Seed {
    fn from(data: [u8; SEED_BYTES]) -> Self {
        Self::new(data)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl ConstantTimeEq for Seed {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.data.ct_eq(&other.data)
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed<{}>[REDACTED]", SEED_BYTES)
    }
}
