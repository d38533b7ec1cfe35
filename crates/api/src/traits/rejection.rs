//! Acceptance decisions for the signing loop's rejection step

/// Outcome of one acceptance test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionOutcome {
    /// The candidate passed the bound test
    Accepted,
    /// The candidate failed the bound test but was let through by a bypass
    Bypassed,
    /// The candidate must be discarded and another iteration run
    Rejected,
}

impl RejectionOutcome {
    /// True for `Accepted` and `Bypassed`
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// True only when a probabilistic bypass fired
    pub fn is_bypassed(self) -> bool {
        matches!(self, Self::Bypassed)
    }
}

/// Decides whether a signing candidate with a given norm is kept
pub trait AcceptancePolicy {
    /// Policy identifier
    fn name(&self) -> &'static str;

    /// True for the standard bound test; false for policies that weaken soundness
    fn is_standard(&self) -> bool;

    /// Evaluate a candidate against `bound`
    fn evaluate(&mut self, candidate_norm: i64, bound: i64) -> RejectionOutcome;

    /// Convenience wrapper returning only the accept/reject bit
    fn accept(&mut self, candidate_norm: i64, bound: i64) -> bool {
        self.evaluate(candidate_norm, bound).is_accepted()
    }
}

/// Passive sink for acceptance outcomes.
///
/// Observers only watch; they are handed outcomes after the decision has been
/// made and cannot change it. Implementations shared across threads must
/// synchronize internally.
pub trait RejectionObserver {
    /// Record a single outcome
    fn record(&self, outcome: RejectionOutcome);
}

impl RejectionObserver for () {
    fn record(&self, _outcome: RejectionOutcome) {}
}

impl<O: RejectionObserver + ?Sized> RejectionObserver for &O {
    fn record(&self, outcome: RejectionOutcome) {
        (**self).record(outcome)
    }
}
