//! Iterated SHA3-256 backend
//!
//! Digest `j` is `SHA3-256(seed)` for `j = 0` and `SHA3-256(seed || le32(j))`
//! afterwards. The stream is the concatenation of the first `iterations`
//! digests and ends there: once the budget is spent every further read fails
//! with [`Error::Exhausted`]. Digests are computed only when the previous one
//! has been fully consumed.

use dchallenge_api::{ByteStream, Error, RandomnessBackend, Result, Seed};
use dchallenge_params::constants::{SHA3_ITERATIONS, SHA3_OUTPUT_BYTES};
use sha3::{Digest, Sha3_256};
use tracing::trace;
use zeroize::Zeroize;

/// Fixed-budget stream built from counter-separated SHA3-256 digests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IteratedSha3Backend {
    iterations: usize,
}

impl IteratedSha3Backend {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Number of digests per stream
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Total bytes a stream can deliver
    pub fn budget(&self) -> usize {
        self.iterations.saturating_mul(SHA3_OUTPUT_BYTES)
    }
}

impl Default for IteratedSha3Backend {
    fn default() -> Self {
        Self::new(SHA3_ITERATIONS)
    }
}

impl RandomnessBackend for IteratedSha3Backend {
    type Stream = IteratedSha3Stream;

    fn name(&self) -> &'static str {
        "SHA3-256-iterated"
    }

    fn open(&self, seed: &Seed) -> Result<IteratedSha3Stream> {
        Ok(IteratedSha3Stream {
            seed: seed.clone(),
            block: [0u8; SHA3_OUTPUT_BYTES],
            pos: SHA3_OUTPUT_BYTES,
            next_counter: 0,
            iterations: self.iterations,
            consumed: 0,
        })
    }
}

/// Lazily computed concatenation of SHA3-256 digests
pub struct IteratedSha3Stream {
    seed: Seed,
    block: [u8; SHA3_OUTPUT_BYTES],
    pos: usize,
    next_counter: usize,
    iterations: usize,
    consumed: usize,
}

impl IteratedSha3Stream {
    fn refill(&mut self) -> Result<()> {
        if self.next_counter >= self.iterations {
            return Err(Error::Exhausted {
                context: "SHA3-256-iterated",
                message: format!(
                    "all {} digests ({} bytes) consumed",
                    self.iterations,
                    self.iterations.saturating_mul(SHA3_OUTPUT_BYTES)
                ),
            });
        }

        let mut hasher = Sha3_256::new();
        hasher.update(self.seed.as_bytes());
        if self.next_counter > 0 {
            let counter = u32::try_from(self.next_counter).map_err(|_| Error::Other {
                context: "SHA3-256-iterated",
                message: "digest counter overflow".into(),
            })?;
            hasher.update(counter.to_le_bytes());
        }
        self.block.copy_from_slice(&hasher.finalize());
        self.pos = 0;
        trace!(counter = self.next_counter, "computed SHA3-256 digest");
        self.next_counter += 1;
        Ok(())
    }

    /// Bytes left before the stream is exhausted
    pub fn remaining(&self) -> usize {
        self.iterations.saturating_mul(SHA3_OUTPUT_BYTES) - self.consumed
    }
}

impl ByteStream for IteratedSha3Stream {
    #[inline]
    fn next_byte(&mut self) -> Result<u8> {
        if self.pos == SHA3_OUTPUT_BYTES {
            self.refill()?;
        }
        let byte = self.block[self.pos];
        self.pos += 1;
        self.consumed += 1;
        Ok(byte)
    }

    fn consumed(&self) -> usize {
        self.consumed
    }
}

impl Drop for IteratedSha3Stream {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}
