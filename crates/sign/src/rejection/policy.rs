//! Acceptance policies

use dchallenge_api::{AcceptancePolicy, RejectionOutcome};
use dchallenge_params::constants::BYPASS_ONE_IN;
use dchallenge_params::{AcceptanceMode, ParameterSet};
use rand::{CryptoRng, RngCore};
use tracing::warn;

use crate::error::{Error, Result};

/// Accept iff `norm < bound`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundPolicy;

impl AcceptancePolicy for BoundPolicy {
    fn name(&self) -> &'static str {
        "bound"
    }

    fn is_standard(&self) -> bool {
        true
    }

    #[inline]
    fn evaluate(&mut self, candidate_norm: i64, bound: i64) -> RejectionOutcome {
        if candidate_norm < bound {
            RejectionOutcome::Accepted
        } else {
            RejectionOutcome::Rejected
        }
    }
}

/// Bound test, then let a failed candidate through when one fresh random byte
/// is divisible by `one_in`.
///
/// NOT a standard rejection step: accepted candidates may leak information
/// about the secret. Only for experiments on rejection rates.
#[derive(Debug)]
pub struct BypassPolicy<R> {
    rng: R,
    one_in: u8,
}

impl<R: RngCore + CryptoRng> BypassPolicy<R> {
    /// One-in-ten bypass
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            one_in: BYPASS_ONE_IN,
        }
    }

    /// Bypass when `byte % one_in == 0`
    pub fn with_one_in(rng: R, one_in: u8) -> Result<Self> {
        if one_in == 0 {
            return Err(Error::Configuration("bypass divisor must be non-zero".into()));
        }
        Ok(Self { rng, one_in })
    }

    pub fn one_in(&self) -> u8 {
        self.one_in
    }

    /// Draw one byte and decide whether to bypass
    pub fn maybe_bypass(&mut self) -> bool {
        let mut byte = [0u8; 1];
        self.rng.fill_bytes(&mut byte);
        byte[0] % self.one_in == 0
    }
}

impl<R: RngCore + CryptoRng> AcceptancePolicy for BypassPolicy<R> {
    fn name(&self) -> &'static str {
        "probabilistic-bypass"
    }

    fn is_standard(&self) -> bool {
        false
    }

    fn evaluate(&mut self, candidate_norm: i64, bound: i64) -> RejectionOutcome {
        if candidate_norm < bound {
            RejectionOutcome::Accepted
        } else if self.maybe_bypass() {
            RejectionOutcome::Bypassed
        } else {
            RejectionOutcome::Rejected
        }
    }
}

/// The policy a parameter set calls for
#[derive(Debug)]
pub enum Policy<R> {
    Bound(BoundPolicy),
    Bypass(BypassPolicy<R>),
}

impl<R: RngCore + CryptoRng> Policy<R> {
    /// Select the policy for `params`; `rng` is only used by the bypass
    pub fn for_params(params: &ParameterSet, rng: R) -> Result<Self> {
        match params.acceptance_mode() {
            AcceptanceMode::Bound => Ok(Policy::Bound(BoundPolicy)),
            AcceptanceMode::Bypass { one_in } => {
                warn!(
                    config = params.name(),
                    one_in, "non-standard acceptance policy active: probabilistic bypass"
                );
                Ok(Policy::Bypass(BypassPolicy::with_one_in(rng, one_in)?))
            }
        }
    }
}

impl<R: RngCore + CryptoRng> AcceptancePolicy for Policy<R> {
    fn name(&self) -> &'static str {
        match self {
            Policy::Bound(p) => p.name(),
            Policy::Bypass(p) => p.name(),
        }
    }

    fn is_standard(&self) -> bool {
        match self {
            Policy::Bound(p) => p.is_standard(),
            Policy::Bypass(p) => p.is_standard(),
        }
    }

    fn evaluate(&mut self, candidate_norm: i64, bound: i64) -> RejectionOutcome {
        match self {
            Policy::Bound(p) => p.evaluate(candidate_norm, bound),
            Policy::Bypass(p) => p.evaluate(candidate_norm, bound),
        }
    }
}

/// Norm bounds the signing loop checks a candidate against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectionBounds {
    /// `gamma1 - beta`
    pub z: i64,
    /// `gamma2 - beta`, or `gamma2 - 2*beta` under the doubled-bound variant
    pub lowbits: i64,
    /// Maximum hint count
    pub hints: usize,
}

impl RejectionBounds {
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            z: params.z_bound(),
            lowbits: params.lowbits_bound(),
            hints: params.hint_weight(),
        }
    }
}
