//! The immutable parameter set and the selections it carries

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::advisory::Advisory;
use crate::builder::ParameterSetBuilder;
use crate::constants::BYPASS_ONE_IN;

/// Hash construction feeding the challenge sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum BackendKind {
    /// SHAKE256 squeezed block by block
    Shake256,
    /// Concatenated SHA3-256 digests over `seed || counter`, fixed byte budget
    IteratedSha3,
}

impl BackendKind {
    /// Backend identifier
    pub fn name(self) -> &'static str {
        match self {
            Self::Shake256 => "SHAKE256",
            Self::IteratedSha3 => "SHA3-256-iterated",
        }
    }
}

/// Raw-bits to coefficient mapping used by the expanded alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum ExpandedMapping {
    /// `(bits & 7) % 5 - 2`, zero outcomes redrawn; skewed toward negative values
    #[default]
    ModFive,
    /// 3 bits, values outside {0, 1, 3, 4} redrawn; uniform over {-2, -1, 1, 2}
    UniformRejection,
}

/// Non-zero coefficient alphabet of the challenge polynomial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum AlphabetKind {
    /// {-1, 1}
    Standard,
    /// {-2, -1, 1, 2}
    Expanded(ExpandedMapping),
}

impl AlphabetKind {
    /// Allowed non-zero magnitudes, ascending
    pub fn magnitudes(self) -> &'static [u8] {
        match self {
            Self::Standard => &[1],
            Self::Expanded(_) => &[1, 2],
        }
    }

    /// Raw bits consumed per coefficient draw
    pub fn bits_per_draw(self) -> u32 {
        match self {
            Self::Standard => 1,
            Self::Expanded(_) => 3,
        }
    }

    /// Largest coefficient magnitude
    pub fn max_magnitude(self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Expanded(_) => 2,
        }
    }
}

/// How the rejection bound is relaxed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum RelaxationVariant {
    /// Only BETA is raised (78 -> 100)
    #[default]
    IncreasedBound,
    /// The low-bits check uses `gamma2 - 2 * beta`
    DoubledBound,
    /// Failed bound tests are let through one time in ten
    ProbabilisticBypass,
}

/// Mutually exclusive parameter tweaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum Tweak {
    /// Unmodified parameters
    #[default]
    None,
    /// TAU 39 -> 50, OMEGA 80 -> 70, BETA -> 100
    ChallengeBounds,
    /// BETA 78 -> 100, plus the selected variant
    RelaxedRejection(RelaxationVariant),
}

/// Acceptance rule the signing loop must apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceptanceMode {
    /// Accept iff `norm < bound`
    Bound,
    /// Bound test, then accept failures with probability `1 / one_in`
    Bypass { one_in: u8 },
}

/// What to do when BETA < TAU * ETA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum ConsistencyPolicy {
    /// Refuse the parameter set
    #[default]
    Strict,
    /// Accept it and record [`Advisory::BetaBelowTauEta`]
    AllowBetaBelowTauEta,
}

/// A validated, immutable bundle of scheme constants.
///
/// Only [`ParameterSetBuilder::build`] creates values of this type, so every
/// `ParameterSet` in existence has passed validation. Derived byte sizes are
/// methods (see `sizes.rs`) and are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    pub(crate) config_id: u8,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) algorithm_name: String,

    pub(crate) ring_degree: usize,
    pub(crate) modulus: u32,
    pub(crate) d: u32,
    pub(crate) k: usize,
    pub(crate) l: usize,
    pub(crate) eta: u32,
    pub(crate) tau: usize,
    pub(crate) omega: usize,
    pub(crate) beta: u32,
    pub(crate) gamma1: u32,
    pub(crate) gamma2: u32,

    pub(crate) backend: BackendKind,
    pub(crate) alphabet: AlphabetKind,
    pub(crate) tweak: Tweak,
    pub(crate) consistency: ConsistencyPolicy,
    pub(crate) sha3_iterations: usize,

    pub(crate) advisories: Vec<Advisory>,
}

impl ParameterSet {
    /// Start an empty builder
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::new()
    }

    /// Numeric configuration identifier
    pub fn config_id(&self) -> u8 {
        self.config_id
    }

    /// Short configuration name, e.g. `Config3-ChallengeBounds`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Algorithm name, e.g. `Dilithium2-ChallengeBounds`
    pub fn algorithm_name(&self) -> &str {
        &self.algorithm_name
    }

    /// Polynomial degree N
    pub fn ring_degree(&self) -> usize {
        self.ring_degree
    }

    /// Prime modulus Q
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Dropped bits D
    pub fn d(&self) -> u32 {
        self.d
    }

    /// Rows of A
    pub fn k(&self) -> usize {
        self.k
    }

    /// Columns of A
    pub fn l(&self) -> usize {
        self.l
    }

    /// Secret coefficient bound ETA
    pub fn eta(&self) -> u32 {
        self.eta
    }

    /// Challenge weight TAU
    pub fn challenge_weight(&self) -> usize {
        self.tau
    }

    /// Hint weight OMEGA
    pub fn hint_weight(&self) -> usize {
        self.omega
    }

    /// Rejection bound BETA as configured
    pub fn rejection_bound(&self) -> u32 {
        self.beta
    }

    /// Low-order rounding range GAMMA1
    pub fn gamma1(&self) -> u32 {
        self.gamma1
    }

    /// High-order rounding range GAMMA2
    pub fn gamma2(&self) -> u32 {
        self.gamma2
    }

    /// Active randomness backend
    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    /// Active coefficient alphabet
    pub fn alphabet(&self) -> AlphabetKind {
        self.alphabet
    }

    /// Active tweak
    pub fn tweak(&self) -> Tweak {
        self.tweak
    }

    /// BETA/TAU·ETA consistency policy the set was built under
    pub fn consistency(&self) -> ConsistencyPolicy {
        self.consistency
    }

    /// Number of SHA3-256 digests available to the iterated backend
    pub fn sha3_iterations(&self) -> usize {
        self.sha3_iterations
    }

    /// Non-fatal findings recorded while building
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// BETA actually used by the signing loop's bound checks
    pub fn effective_beta(&self) -> u32 {
        match self.tweak {
            Tweak::RelaxedRejection(RelaxationVariant::DoubledBound) => 2 * self.beta,
            _ => self.beta,
        }
    }

    /// Bound for `||z||∞`, i.e. `gamma1 - beta`
    pub fn z_bound(&self) -> i64 {
        i64::from(self.gamma1) - i64::from(self.beta)
    }

    /// Bound for `||LowBits(w - c·s2)||∞`, i.e. `gamma2 - effective_beta`
    pub fn lowbits_bound(&self) -> i64 {
        i64::from(self.gamma2) - i64::from(self.effective_beta())
    }

    /// Acceptance rule implied by the tweak
    pub fn acceptance_mode(&self) -> AcceptanceMode {
        match self.tweak {
            Tweak::RelaxedRejection(RelaxationVariant::ProbabilisticBypass) => {
                AcceptanceMode::Bypass { one_in: BYPASS_ONE_IN }
            }
            _ => AcceptanceMode::Bound,
        }
    }

    /// `BETA / (TAU·ETA)` when rejection is relaxed (100/78 ≈ 1.282 for Config 4)
    pub fn beta_relaxation_ratio(&self) -> Option<f64> {
        match self.tweak {
            Tweak::RelaxedRejection(_) => {
                Some(f64::from(self.beta) / (self.tau as f64 * f64::from(self.eta)))
            }
            _ => None,
        }
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (TAU={}, OMEGA={}, BETA={}, GAMMA1={}, GAMMA2={}, backend={}, alphabet={:?})",
            self.algorithm_name,
            self.tau,
            self.omega,
            self.beta,
            self.gamma1,
            self.gamma2,
            self.backend.name(),
            self.alphabet,
        )
    }
}
