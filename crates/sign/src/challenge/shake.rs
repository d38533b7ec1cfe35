//! SHAKE256 stream backend

use dchallenge_api::{ByteStream, RandomnessBackend, Result, Seed};
use dchallenge_params::constants::SHAKE256_RATE;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake256, Shake256Reader};
use tracing::trace;
use zeroize::Zeroize;

/// Absorbs the seed once and squeezes rate-sized blocks on demand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shake256Backend;

impl RandomnessBackend for Shake256Backend {
    type Stream = Shake256Stream;

    fn name(&self) -> &'static str {
        "SHAKE256"
    }

    fn open(&self, seed: &Seed) -> Result<Shake256Stream> {
        let mut hasher = Shake256::default();
        hasher.update(seed.as_bytes());
        Ok(Shake256Stream {
            reader: hasher.finalize_xof(),
            block: [0u8; SHAKE256_RATE],
            pos: SHAKE256_RATE,
            blocks: 0,
            consumed: 0,
        })
    }
}

/// Unbounded SHAKE256 output, one 136-byte block buffered at a time
pub struct Shake256Stream {
    reader: Shake256Reader,
    block: [u8; SHAKE256_RATE],
    pos: usize,
    blocks: usize,
    consumed: usize,
}

impl Shake256Stream {
    fn refill(&mut self) {
        self.reader.read(&mut self.block);
        self.pos = 0;
        self.blocks += 1;
        trace!(block = self.blocks, "squeezed SHAKE256 block");
    }

    /// Number of blocks squeezed so far
    pub fn blocks_squeezed(&self) -> usize {
        self.blocks
    }
}

impl ByteStream for Shake256Stream {
    #[inline]
    fn next_byte(&mut self) -> Result<u8> {
        if self.pos == SHAKE256_RATE {
            self.refill();
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

impl Drop for Shake256Stream {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}
