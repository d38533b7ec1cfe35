//! Challenge polynomial sampling
//!
//! The sampler is a single algorithm parameterized over two capabilities: a
//! [`RandomnessBackend`] that turns a seed into a byte stream and a
//! [`CoefficientAlphabet`] that turns raw bits into signed coefficients.
//! - `shake.rs`: SHAKE256, squeezed one rate block at a time.
//! - `iterated.rs`: concatenated SHA3-256 digests with a fixed byte budget.
//! - `alphabet.rs`: {-1, 1} and the two {-2, -1, 1, 2} mappings.
//! - `sampler.rs`: the inside-out Fisher-Yates placement.
//!
//! The free functions below pick the monomorphized sampler matching a
//! [`ParameterSet`]'s backend and alphabet.
//!
//! [`RandomnessBackend`]: dchallenge_api::RandomnessBackend
//! [`CoefficientAlphabet`]: dchallenge_api::CoefficientAlphabet

use dchallenge_api::{RandomnessBackend, Seed};
use dchallenge_params::constants::{DILITHIUM_N, SHA3_ITERATIONS};
use dchallenge_params::{AlphabetKind, BackendKind, ExpandedMapping, ParameterSet};
use subtle::ConstantTimeEq;
use tracing::debug;

mod alphabet;
mod iterated;
mod polynomial;
mod sampler;
mod shake;

pub use alphabet::{ExpandedModFive, ExpandedUniform, Ternary};
pub use iterated::{IteratedSha3Backend, IteratedSha3Stream};
pub use polynomial::{ChallengePolynomial, CoefficientHistogram};
pub use sampler::{ChallengeSampler, MAX_DRAW_BYTES};
pub use shake::{Shake256Backend, Shake256Stream};

use crate::error::{Error, Result};

/// Sample from SHAKE256 over a degree-256 ring with the given alphabet
pub fn sample(seed: &Seed, weight: usize, alphabet: AlphabetKind) -> Result<ChallengePolynomial> {
    sample_with(
        BackendKind::Shake256,
        alphabet,
        DILITHIUM_N,
        SHA3_ITERATIONS,
        seed,
        weight,
    )
}

/// Sample the challenge for `params`: its TAU, backend, alphabet and ring degree
pub fn sample_challenge(params: &ParameterSet, seed: &Seed) -> Result<ChallengePolynomial> {
    sample_with_weight(params, seed, params.challenge_weight())
}

/// Like [`sample_challenge`] with an explicit weight.
///
/// An out-of-range weight is an error; it is never replaced by TAU, so a
/// signer and a verifier cannot silently end up with different challenges.
pub fn sample_with_weight(
    params: &ParameterSet,
    seed: &Seed,
    weight: usize,
) -> Result<ChallengePolynomial> {
    sample_with(
        params.backend(),
        params.alphabet(),
        params.ring_degree(),
        params.sha3_iterations(),
        seed,
        weight,
    )
}

fn sample_with(
    backend: BackendKind,
    alphabet: AlphabetKind,
    ring_degree: usize,
    sha3_iterations: usize,
    seed: &Seed,
    weight: usize,
) -> Result<ChallengePolynomial> {
    match backend {
        BackendKind::Shake256 => {
            sample_alphabet(Shake256Backend, alphabet, ring_degree, seed, weight)
        }
        BackendKind::IteratedSha3 => sample_alphabet(
            IteratedSha3Backend::new(sha3_iterations),
            alphabet,
            ring_degree,
            seed,
            weight,
        ),
    }
}

fn sample_alphabet<B: RandomnessBackend>(
    backend: B,
    alphabet: AlphabetKind,
    ring_degree: usize,
    seed: &Seed,
    weight: usize,
) -> Result<ChallengePolynomial> {
    match alphabet {
        AlphabetKind::Standard => ChallengeSampler::<B, Ternary>::new(backend)
            .with_ring_degree(ring_degree)
            .sample(seed, weight),
        AlphabetKind::Expanded(ExpandedMapping::ModFive) => {
            ChallengeSampler::<B, ExpandedModFive>::new(backend)
                .with_ring_degree(ring_degree)
                .sample(seed, weight)
        }
        AlphabetKind::Expanded(ExpandedMapping::UniformRejection) => {
            ChallengeSampler::<B, ExpandedUniform>::new(backend)
                .with_ring_degree(ring_degree)
                .sample(seed, weight)
        }
    }
}

/// Number of seeds exercised by [`challenge_self_test`]
pub const SELF_TEST_SEEDS: u8 = 16;

/// Run the configured sampler over a fixed set of seeds and check every
/// output invariant: exact weight, alphabet membership, magnitude bound and
/// reproducibility.
///
/// Returns the coefficient histogram of all outputs on success.
pub fn challenge_self_test(params: &ParameterSet) -> Result<CoefficientHistogram> {
    let tau = params.challenge_weight();
    let alphabet = params.alphabet();
    let mut histogram = CoefficientHistogram::new();

    for i in 0..SELF_TEST_SEEDS {
        let mut bytes = [0u8; 32];
        bytes[0] = i;
        bytes[31] = i.wrapping_mul(37);
        let seed = Seed::new(bytes);

        let first = sample_challenge(params, &seed)?;
        let second = sample_challenge(params, &seed)?;

        if !bool::from(first.ct_eq(&second)) {
            return Err(Error::Sampling(format!("seed {} is not reproducible", i)));
        }
        if first.weight() != tau {
            return Err(Error::Sampling(format!(
                "seed {} produced weight {} instead of {}",
                i,
                first.weight(),
                tau
            )));
        }
        let outside = first
            .nonzero()
            .find(|&(_, c)| !alphabet.magnitudes().contains(&c.unsigned_abs()));
        if let Some((index, value)) = outside {
            return Err(Error::Sampling(format!(
                "seed {} produced coefficient {} at {} outside {:?}",
                i, value, index, alphabet
            )));
        }
        histogram.record(&first);
    }

    debug!(config = params.name(), %histogram, "challenge self-test passed");
    Ok(histogram)
}
