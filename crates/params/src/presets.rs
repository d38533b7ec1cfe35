//! Named parameter sets
//!
//! Each preset is an ordinary builder chain, so presets go through exactly the
//! same validation as hand-built sets.

use dchallenge_api::Result;

use crate::set::{ExpandedMapping, ParameterSet, RelaxationVariant};

/// Config 1: unmodified Dilithium2 (TAU 39, OMEGA 80, BETA 78, SHAKE256, {-1, 1})
pub fn baseline() -> Result<ParameterSet> {
    ParameterSet::builder()
        .use_shake256()
        .standard_challenge()
        .build()
}

/// Config 2: Dilithium2 with the challenge stream drawn from iterated SHA3-256
pub fn sha3_challenge() -> Result<ParameterSet> {
    ParameterSet::builder()
        .use_sha3_256()
        .standard_challenge()
        .build()
}

/// Config 3: TAU 50, OMEGA 70, BETA 100
pub fn challenge_bounds() -> Result<ParameterSet> {
    ParameterSet::builder()
        .use_shake256()
        .standard_challenge()
        .modified_challenge_bounds()
        .build()
}

/// Config 4: BETA 100 with the given relaxation variant
pub fn relaxed_rejection(variant: RelaxationVariant) -> Result<ParameterSet> {
    ParameterSet::builder()
        .use_shake256()
        .standard_challenge()
        .relaxed_rejection(variant)
        .build()
}

/// Baseline constants with challenge coefficients drawn from {-2, -1, 1, 2}
pub fn expanded_challenge(mapping: ExpandedMapping) -> Result<ParameterSet> {
    ParameterSet::builder()
        .config_id(5)
        .name("Config5-ExpandedChallenge")
        .description("Dilithium2 with challenge coefficients in {-2, -1, 1, 2}")
        .algorithm_name("Dilithium2-ExpandedChallenge")
        .use_shake256()
        .expanded_challenge(mapping)
        .build()
}

/// Every preset with its default variant, in configuration-id order
pub fn all() -> Result<Vec<ParameterSet>> {
    Ok(vec![
        baseline()?,
        sha3_challenge()?,
        challenge_bounds()?,
        relaxed_rejection(RelaxationVariant::default())?,
        expanded_challenge(ExpandedMapping::default())?,
    ])
}
