//! Byte-stream capabilities consumed by the challenge sampler
//!
//! The sampler never hashes anything itself. It asks a [`RandomnessBackend`]
//! to open a [`ByteStream`] over a seed and then pulls bytes and words from it.
//! Each call to [`RandomnessBackend::open`] yields a stream that is exclusively
//! owned by the caller, so concurrent samplings never share hash state.

use crate::{Result, Seed};

/// A deterministic, finite or unbounded source of pseudorandom bytes
pub trait ByteStream {
    /// Returns the next byte of the stream.
    ///
    /// # Errors
    ///
    /// Must return [`crate::Error::Exhausted`] once the stream's byte budget is
    /// spent. Implementations must never wrap around and replay earlier output.
    fn next_byte(&mut self) -> Result<u8>;

    /// Returns the next eight bytes of the stream as a little-endian word
    fn next_word(&mut self) -> Result<u64> {
        let mut word = [0u8; 8];
        for byte in word.iter_mut() {
            *byte = self.next_byte()?;
        }
        Ok(u64::from_le_bytes(word))
    }

    /// Number of bytes handed out so far
    fn consumed(&self) -> usize;
}

/// A hash construction that turns a seed into a [`ByteStream`]
pub trait RandomnessBackend {
    /// Stream type produced by this backend
    type Stream: ByteStream;

    /// Human readable backend name, used in logs and errors
    fn name(&self) -> &'static str;

    /// Opens a fresh stream over `seed`.
    ///
    /// Two streams opened over the same seed by equally configured backends
    /// must yield identical bytes.
    fn open(&self, seed: &Seed) -> Result<Self::Stream>;
}
