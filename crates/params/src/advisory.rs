//! Non-fatal findings about a parameter set

use core::fmt;

/// A finding that does not block operation but must be reported.
///
/// Advisories are logged with `tracing::warn!` when a parameter set is built
/// and remain queryable through [`crate::ParameterSet::advisories`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// BETA < TAU·ETA, accepted under an explicit override
    BetaBelowTauEta { beta: u32, tau: usize, eta: u32 },
    /// The acceptance policy accepts candidates that fail the bound test
    NonStandardAcceptance { one_in: u8 },
    /// The iterated backend's budget is close to or below the bytes a typical
    /// sampling call consumes, so some seeds will fail closed
    IteratedBudgetTight { expected_bytes: f64, budget_bytes: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::BetaBelowTauEta { beta, tau, eta } => write!(
                f,
                "BETA={} is below TAU*ETA={}*{}={}; norm bounds no longer cover c*s",
                beta,
                tau,
                eta,
                *tau as u64 * u64::from(*eta)
            ),
            Advisory::NonStandardAcceptance { one_in } => write!(
                f,
                "probabilistic bypass accepts 1 in {} rejected candidates; not a standard rejection step",
                one_in
            ),
            Advisory::IteratedBudgetTight { expected_bytes, budget_bytes } => write!(
                f,
                "iterated SHA3 backend expects ~{:.1} bytes per challenge against a budget of {}",
                expected_bytes, budget_bytes
            ),
        }
    }
}
