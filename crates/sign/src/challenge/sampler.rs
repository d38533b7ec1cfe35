//! Backend- and alphabet-generic challenge sampler

use core::marker::PhantomData;

use dchallenge_api::{ByteStream, CoefficientAlphabet, RandomnessBackend, Seed};
use dchallenge_params::constants::{DILITHIUM_N, MAX_RING_DEGREE};
use tracing::{debug, error};

use super::polynomial::ChallengePolynomial;
use crate::error::{Error, Result};

/// Ceiling on stream bytes a single sampling call may consume
pub const MAX_DRAW_BYTES: usize = 1 << 16;

/// Places `weight` non-zero coefficients with an inside-out Fisher-Yates
/// shuffle over the last `weight` slots.
///
/// The first eight stream bytes form a little-endian sign/magnitude word that
/// is consumed `A::BITS` at a time from the low end. When fewer than
/// `A::BITS` bits remain, the leftover bits are dropped and the next eight
/// stream bytes become the new word; every other byte is a position draw.
#[derive(Debug, Clone)]
pub struct ChallengeSampler<B, A> {
    backend: B,
    ring_degree: usize,
    draw_limit: usize,
    _alphabet: PhantomData<A>,
}

impl<B, A> ChallengeSampler<B, A>
where
    B: RandomnessBackend,
    A: CoefficientAlphabet,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            ring_degree: DILITHIUM_N,
            draw_limit: MAX_DRAW_BYTES,
            _alphabet: PhantomData,
        }
    }

    /// Sample over a ring of degree `n` instead of 256
    pub fn with_ring_degree(mut self, n: usize) -> Self {
        self.ring_degree = n;
        self
    }

    /// Lower or raise the per-call byte ceiling
    pub fn with_draw_limit(mut self, limit: usize) -> Self {
        self.draw_limit = limit;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn ring_degree(&self) -> usize {
        self.ring_degree
    }

    /// Deterministically derive a challenge with exactly `weight` non-zero
    /// coefficients from `seed`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidWeight`] if `weight` is 0 or above the ring degree
    /// * [`Error::Exhausted`] if a finite backend runs dry
    /// * [`Error::DrawLimitExceeded`] if the byte ceiling is reached
    pub fn sample(&self, seed: &Seed, weight: usize) -> Result<ChallengePolynomial> {
        self.sample_metered(seed, weight).map(|(poly, _)| poly)
    }

    /// [`sample`](Self::sample), also returning the number of stream bytes used
    pub fn sample_metered(&self, seed: &Seed, weight: usize) -> Result<(ChallengePolynomial, usize)> {
        let n = self.ring_degree;
        if n == 0 || n > MAX_RING_DEGREE {
            return Err(Error::Configuration(format!(
                "ring degree {} must be in [1, {}] for byte-sized position draws",
                n, MAX_RING_DEGREE
            )));
        }
        if weight == 0 || weight > n {
            return Err(Error::InvalidWeight {
                weight,
                ring_degree: n,
            });
        }

        let mut draws = Draws {
            stream: self.backend.open(seed)?,
            backend: self.backend.name(),
            limit: self.draw_limit,
        };

        let mut signs = SignWord::<A>::load(&mut draws)?;
        let mut coeffs = vec![0i8; n];

        for i in (n - weight)..n {
            let b = loop {
                let b = usize::from(draws.byte()?);
                if b <= i {
                    break b;
                }
            };
            coeffs[i] = coeffs[b];
            coeffs[b] = signs.next(&mut draws)?;
        }

        let consumed = draws.stream.consumed();
        debug!(
            backend = draws.backend,
            alphabet = A::NAME,
            weight,
            bytes = consumed,
            "challenge sampled"
        );

        Ok((ChallengePolynomial::from_coeffs(coeffs), consumed))
    }
}

/// Stream wrapper enforcing the draw ceiling and labelling exhaustion
struct Draws<S> {
    stream: S,
    backend: &'static str,
    limit: usize,
}

impl<S: ByteStream> Draws<S> {
    /// Fail before a read of `len` bytes would cross the ceiling
    #[inline]
    fn reserve(&self, len: usize) -> Result<()> {
        if self.stream.consumed() + len > self.limit {
            error!(limit = self.limit, backend = self.backend, "challenge draw limit exceeded");
            return Err(Error::DrawLimitExceeded { limit: self.limit });
        }
        Ok(())
    }

    fn label(&self, err: dchallenge_api::Error) -> Error {
        if err.is_exhaustion() {
            error!(
                backend = self.backend,
                consumed = self.stream.consumed(),
                "randomness backend exhausted before the challenge was complete"
            );
            Error::Exhausted {
                backend: self.backend,
                consumed: self.stream.consumed(),
            }
        } else {
            Error::from(err)
        }
    }

    #[inline]
    fn byte(&mut self) -> Result<u8> {
        self.reserve(1)?;
        self.stream.next_byte().map_err(|err| self.label(err))
    }

    fn word(&mut self) -> Result<u64> {
        self.reserve(8)?;
        self.stream.next_word().map_err(|err| self.label(err))
    }
}

/// Sign/magnitude bits, consumed low bits first
struct SignWord<A> {
    word: u64,
    bits_left: u32,
    _alphabet: PhantomData<A>,
}

impl<A: CoefficientAlphabet> SignWord<A> {
    fn load<S: ByteStream>(draws: &mut Draws<S>) -> Result<Self> {
        Ok(Self {
            word: draws.word()?,
            bits_left: u64::BITS,
            _alphabet: PhantomData,
        })
    }

    fn next<S: ByteStream>(&mut self, draws: &mut Draws<S>) -> Result<i8> {
        let mask = (1u64 << A::BITS) - 1;
        loop {
            if self.bits_left < A::BITS {
                self.word = draws.word()?;
                self.bits_left = u64::BITS;
            }
            let raw = (self.word & mask) as u8;
            self.word >>= A::BITS;
            self.bits_left -= A::BITS;
            if let Some(value) = A::map(raw) {
                return Ok(value);
            }
        }
    }
}
