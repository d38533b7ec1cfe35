//! Signing-loop driver

use dchallenge_api::{AcceptancePolicy, RejectionObserver, RejectionOutcome};
use dchallenge_params::constants::MAX_SIGN_ABORTS;
use dchallenge_params::ParameterSet;
use tracing::{debug, warn};

use super::policy::RejectionBounds;
use crate::error::{Error, Result};

/// Norms of one signing candidate, as computed by the surrounding scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<T> {
    pub value: T,
    /// `||z||∞`
    pub z_norm: i64,
    /// `||LowBits(w - c·s2)||∞`
    pub lowbits_norm: i64,
    /// Number of set hint bits
    pub hint_count: usize,
}

/// A candidate that left the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted<T> {
    pub value: T,
    /// Attempts used, including the accepted one
    pub attempts: u32,
    /// `Bypassed` if any norm check was let through by the policy
    pub outcome: RejectionOutcome,
}

/// Runs attempts until the policy accepts a candidate or `max_attempts` is hit.
///
/// Each attempt applies the policy to the `z` norm, then to the low-bits norm,
/// then requires `hint_count <= OMEGA`. The hint check is never bypassed.
/// Exactly one outcome per attempt is handed to the observer.
pub struct RejectionLoop<P, O = ()> {
    policy: P,
    bounds: RejectionBounds,
    max_attempts: u32,
    observer: O,
}

impl<P: AcceptancePolicy> RejectionLoop<P, ()> {
    pub fn new(policy: P, bounds: RejectionBounds) -> Self {
        Self {
            policy,
            bounds,
            max_attempts: u32::from(MAX_SIGN_ABORTS),
            observer: (),
        }
    }

    /// Loop with the bounds of `params`
    pub fn for_params(policy: P, params: &ParameterSet) -> Self {
        Self::new(policy, RejectionBounds::from_params(params))
    }
}

impl<P: AcceptancePolicy, O: RejectionObserver> RejectionLoop<P, O> {
    /// Replace the observer
    pub fn with_observer<O2: RejectionObserver>(self, observer: O2) -> RejectionLoop<P, O2> {
        RejectionLoop {
            policy: self.policy,
            bounds: self.bounds,
            max_attempts: self.max_attempts,
            observer,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn bounds(&self) -> &RejectionBounds {
        &self.bounds
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Judge a single candidate without running the loop
    pub fn judge<T>(&mut self, candidate: &Candidate<T>) -> RejectionOutcome {
        let z = self.policy.evaluate(candidate.z_norm, self.bounds.z);
        if z == RejectionOutcome::Rejected {
            return z;
        }
        let lowbits = self.policy.evaluate(candidate.lowbits_norm, self.bounds.lowbits);
        if lowbits == RejectionOutcome::Rejected {
            return lowbits;
        }
        if candidate.hint_count > self.bounds.hints {
            return RejectionOutcome::Rejected;
        }
        if z.is_bypassed() || lowbits.is_bypassed() {
            RejectionOutcome::Bypassed
        } else {
            RejectionOutcome::Accepted
        }
    }

    /// Call `attempt(kappa)` for `kappa = 0, 1, ...` until a candidate is accepted.
    ///
    /// # Errors
    ///
    /// Errors from `attempt` are returned unchanged;
    /// [`Error::AttemptsExhausted`] after `max_attempts` rejections.
    pub fn run<T, F>(&mut self, mut attempt: F) -> Result<Accepted<T>>
    where
        F: FnMut(u32) -> Result<Candidate<T>>,
    {
        for kappa in 0..self.max_attempts {
            let candidate = attempt(kappa)?;
            let outcome = self.judge(&candidate);
            self.observer.record(outcome);

            if outcome.is_accepted() {
                debug!(
                    policy = self.policy.name(),
                    attempts = kappa + 1,
                    bypassed = outcome.is_bypassed(),
                    "candidate accepted"
                );
                return Ok(Accepted {
                    value: candidate.value,
                    attempts: kappa + 1,
                    outcome,
                });
            }
        }

        warn!(
            policy = self.policy.name(),
            max_attempts = self.max_attempts,
            "rejection loop exhausted"
        );
        Err(Error::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }
}
