//! Parameter sets for the dchallenge crates
//!
//! A [`ParameterSet`] bundles the primitive constants of a Dilithium-style
//! scheme (ring degree, modulus, dimensions, norm bounds) together with the
//! challenge backend and alphabet selections and at most one tweak. Sets are
//! only obtainable through [`ParameterSetBuilder::build`], which validates the
//! whole bundle and reports every inconsistency as a configuration error.
//! Byte sizes are derived on demand.

pub mod advisory;
pub mod builder;
pub mod constants;
pub mod presets;
pub mod raw;
pub mod set;
mod sizes;

pub use advisory::Advisory;
pub use builder::{expected_challenge_bytes, ParameterSetBuilder};
pub use raw::RawParameters;
pub use set::{
    AcceptanceMode, AlphabetKind, BackendKind, ConsistencyPolicy, ExpandedMapping, ParameterSet,
    RelaxationVariant, Tweak,
};
