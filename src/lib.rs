//! # dchallenge
//!
//! Challenge-polynomial sampling, parameter validation and rejection-acceptance
//! policies for Dilithium-style lattice signatures.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dchallenge = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): the challenge sampler and the rejection loop
//! - `serde`: `Serialize`/`Deserialize` for parameter sets and raw flag files
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dchallenge-api`]: error type, seed type and capability traits
//! - [`dchallenge-params`]: validated parameter sets and presets
//! - [`dchallenge-sign`]: challenge sampler and rejection policies

// Core re-exports (always available)
pub use dchallenge_api as api;
pub use dchallenge_params as params;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use dchallenge_sign as sign;

#[cfg(feature = "sign")]
pub use rand;

pub use subtle;
pub use zeroize;

/// Common imports for dchallenge users
pub mod prelude {
    pub use crate::api::{Error, Result, Seed, SEED_BYTES};

    pub use crate::api::{
        AcceptancePolicy, ByteStream, CoefficientAlphabet, RandomnessBackend, RejectionObserver,
        RejectionOutcome,
    };

    pub use crate::params::{
        presets, AlphabetKind, BackendKind, ExpandedMapping, ParameterSet, ParameterSetBuilder,
        RelaxationVariant, Tweak,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        sample_challenge, ChallengePolynomial, ChallengeSampler, Policy, RejectionLoop,
        RejectionStats,
    };

    pub use subtle::ConstantTimeEq;
}
