//! Challenge sampling and rejection-acceptance policies
//!
//! This crate holds the two security-critical pieces a Dilithium-style
//! signing loop needs around its lattice arithmetic:
//!
//! - [`challenge`]: derives the sparse challenge polynomial `c` from the seed
//!   `c~`, with interchangeable randomness backends and coefficient alphabets.
//! - [`rejection`]: decides whether a candidate signature is kept, and drives
//!   the retry loop.
//!
//! Both are pure per call. Nothing here keeps global state; the optional
//! [`rejection::RejectionStats`] counters are passed in explicitly.

pub mod challenge;
pub mod error;
pub mod rejection;

pub use challenge::{
    challenge_self_test, sample, sample_challenge, sample_with_weight, ChallengePolynomial,
    ChallengeSampler, CoefficientHistogram, ExpandedModFive, ExpandedUniform,
    IteratedSha3Backend, Shake256Backend, Ternary,
};
pub use error::{Error, Result};
pub use rejection::{
    BoundPolicy, BypassPolicy, Candidate, Policy, RejectionBounds, RejectionLoop, RejectionStats,
};
