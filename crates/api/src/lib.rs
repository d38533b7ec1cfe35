//! Public API traits and types for the dchallenge crates
//!
//! This crate provides the boundary shared by the parameter layer and the
//! sampler: the error type, the capability traits through which randomness
//! backends, coefficient alphabets and acceptance policies are injected, and
//! the seed type consumed by the challenge sampler.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{
    AcceptancePolicy,
    ByteStream,
    CoefficientAlphabet,
    RandomnessBackend,
    RejectionObserver,
    RejectionOutcome,
};

// Re-export trait modules for direct access
pub use traits::{alphabet, rejection, stream};
