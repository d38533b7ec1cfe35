//! Construction and validation of [`ParameterSet`]

use dchallenge_api::error::validate;
use dchallenge_api::{Error, Result};
use tracing::{debug, warn};

use crate::advisory::Advisory;
use crate::constants::*;
use crate::set::*;

/// Collects primitive constants and selections, then validates them all at once.
///
/// Backend and alphabet selections are recorded rather than overwritten, so
/// selecting two different backends (or none) is reported by [`build`] as a
/// configuration error instead of the last call silently winning.
///
/// Numeric fields left unset default to Dilithium2. Tweaks override TAU,
/// OMEGA and BETA at build time the same way the tweaked parameter headers
/// redefine them.
///
/// [`build`]: ParameterSetBuilder::build
#[derive(Debug, Clone, Default)]
pub struct ParameterSetBuilder {
    config_id: Option<u8>,
    name: Option<String>,
    description: Option<String>,
    algorithm_name: Option<String>,

    ring_degree: Option<usize>,
    modulus: Option<u32>,
    d: Option<u32>,
    k: Option<usize>,
    l: Option<usize>,
    eta: Option<u32>,
    tau: Option<usize>,
    omega: Option<usize>,
    beta: Option<u32>,
    gamma1: Option<u32>,
    gamma2: Option<u32>,
    sha3_iterations: Option<usize>,

    backends: Vec<BackendKind>,
    alphabets: Vec<AlphabetKind>,
    challenge_bounds: bool,
    relaxed_rejection: Option<RelaxationVariant>,
    consistency: ConsistencyPolicy,
}

macro_rules! setter {
    ($(#[$doc:meta])* $field:ident: $ty:ty) => {
        $(#[$doc])*
        pub fn $field(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

impl ParameterSetBuilder {
    /// Empty builder: no backend, no alphabet, no tweak
    pub fn new() -> Self {
        Self::default()
    }

    setter!(/// Numeric configuration identifier
        config_id: u8);
    setter!(/// Polynomial degree N
        ring_degree: usize);
    setter!(/// Prime modulus Q
        modulus: u32);
    setter!(/// Dropped bits D
        d: u32);
    setter!(/// Rows of A
        k: usize);
    setter!(/// Columns of A
        l: usize);
    setter!(/// Secret coefficient bound ETA
        eta: u32);
    setter!(/// Challenge weight TAU
        tau: usize);
    setter!(/// Hint weight OMEGA
        omega: usize);
    setter!(/// Rejection bound BETA
        beta: u32);
    setter!(/// Low-order rounding range GAMMA1
        gamma1: u32);
    setter!(/// High-order rounding range GAMMA2
        gamma2: u32);
    setter!(/// Digest count for the iterated SHA3 backend
        sha3_iterations: usize);

    /// Configuration name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Configuration description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Algorithm name reported to callers
    pub fn algorithm_name(mut self, algorithm_name: impl Into<String>) -> Self {
        self.algorithm_name = Some(algorithm_name.into());
        self
    }

    /// Select a randomness backend
    pub fn backend(mut self, backend: BackendKind) -> Self {
        self.backends.push(backend);
        self
    }

    /// Select the SHAKE256 backend
    pub fn use_shake256(self) -> Self {
        self.backend(BackendKind::Shake256)
    }

    /// Select the iterated SHA3-256 backend
    pub fn use_sha3_256(self) -> Self {
        self.backend(BackendKind::IteratedSha3)
    }

    /// Select a coefficient alphabet
    pub fn alphabet(mut self, alphabet: AlphabetKind) -> Self {
        self.alphabets.push(alphabet);
        self
    }

    /// Select the {-1, 1} alphabet
    pub fn standard_challenge(self) -> Self {
        self.alphabet(AlphabetKind::Standard)
    }

    /// Select the {-2, -1, 1, 2} alphabet with the given mapping
    pub fn expanded_challenge(self, mapping: ExpandedMapping) -> Self {
        self.alphabet(AlphabetKind::Expanded(mapping))
    }

    /// Enable the TAU/OMEGA tweak
    pub fn modified_challenge_bounds(mut self) -> Self {
        self.challenge_bounds = true;
        self
    }

    /// Enable the relaxed rejection tweak
    pub fn relaxed_rejection(mut self, variant: RelaxationVariant) -> Self {
        self.relaxed_rejection = Some(variant);
        self
    }

    /// Accept BETA < TAU·ETA, recording an advisory instead of failing
    pub fn allow_beta_below_tau_eta(mut self) -> Self {
        self.consistency = ConsistencyPolicy::AllowBetaBelowTauEta;
        self
    }

    /// Set the BETA consistency policy explicitly
    pub fn consistency(mut self, policy: ConsistencyPolicy) -> Self {
        self.consistency = policy;
        self
    }

    /// Validate everything and produce the immutable parameter set.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] for every violated rule; nothing is
    /// partially applied.
    pub fn build(self) -> Result<ParameterSet> {
        let backend = exactly_one("randomness backend", &self.backends)?;
        let alphabet = exactly_one("coefficient alphabet", &self.alphabets)?;

        let tweak = match (self.challenge_bounds, self.relaxed_rejection) {
            (true, Some(_)) => {
                return Err(Error::InvalidConfiguration {
                    context: "tweaks",
                    message: "Cannot enable both MODIFIED_CHALLENGE_BOUNDS and RELAXED_REJECTION simultaneously".into(),
                })
            }
            (true, None) => Tweak::ChallengeBounds,
            (false, Some(variant)) => Tweak::RelaxedRejection(variant),
            (false, None) => Tweak::None,
        };

        let ring_degree = self.ring_degree.unwrap_or(DILITHIUM_N);
        let modulus = self.modulus.unwrap_or(DILITHIUM_Q);
        let d = self.d.unwrap_or(DILITHIUM_D);
        let k = self.k.unwrap_or(4);
        let l = self.l.unwrap_or(4);
        let eta = self.eta.unwrap_or(2);
        let gamma1 = self.gamma1.unwrap_or(1 << 17);
        let gamma2 = self.gamma2.unwrap_or((DILITHIUM_Q - 1) / 88);
        let sha3_iterations = self.sha3_iterations.unwrap_or(SHA3_ITERATIONS);

        let mut tau = self.tau.unwrap_or(39);
        let mut omega = self.omega.unwrap_or(80);
        let mut beta = self.beta.unwrap_or(78);
        match tweak {
            Tweak::ChallengeBounds => {
                tau = 50;
                omega = 70;
                beta = 100;
            }
            Tweak::RelaxedRejection(_) => beta = 100,
            Tweak::None => {}
        }

        validate::configuration(
            (8..=MAX_RING_DEGREE).contains(&ring_degree) && ring_degree % 8 == 0,
            "ring_degree",
            format!("N={} must be a multiple of 8 in [8, {}]", ring_degree, MAX_RING_DEGREE),
        )?;
        validate::configuration(
            modulus >= 3 && modulus % 2 == 1,
            "modulus",
            format!("Q={} must be an odd prime", modulus),
        )?;
        validate::configuration(
            d >= 1 && d < bit_length(modulus - 1),
            "d",
            format!("D={} must be in [1, {})", d, bit_length(modulus - 1)),
        )?;
        validate::configuration(
            (1..=MAX_DIMENSION).contains(&k) && (1..=MAX_DIMENSION).contains(&l),
            "dimensions",
            format!("K={} and L={} must be in [1, {}]", k, l, MAX_DIMENSION),
        )?;
        validate::configuration(
            (1..=MAX_ETA).contains(&eta),
            "eta",
            format!("ETA={} must be in [1, {}]", eta, MAX_ETA),
        )?;
        validate::configuration(
            gamma1 >= 2 && gamma1.is_power_of_two() && gamma1 < modulus / 2,
            "gamma1",
            format!("GAMMA1={} must be a power of two below Q/2", gamma1),
        )?;
        validate::configuration(
            gamma2 >= 1 && (u64::from(modulus) - 1) % (2 * u64::from(gamma2)) == 0,
            "gamma2",
            format!("GAMMA2={} must divide (Q-1)/2", gamma2),
        )?;
        validate::configuration(
            (1..=ring_degree).contains(&tau),
            "tau",
            format!("TAU={} must be between 1 and N ({})", tau, ring_degree),
        )?;
        validate::configuration(
            (k..=ring_degree * k).contains(&omega),
            "omega",
            format!("OMEGA={} must be between K ({}) and N*K ({})", omega, k, ring_degree * k),
        )?;
        let budget_bytes = sha3_iterations
            .checked_mul(SHA3_OUTPUT_BYTES)
            .filter(|_| sha3_iterations >= 1)
            .ok_or_else(|| Error::InvalidConfiguration {
                context: "sha3_iterations",
                message: format!("{} digests is not a usable budget", sha3_iterations),
            })?;

        let mut advisories = Vec::new();

        let tau_eta = tau as u64 * u64::from(eta);
        if u64::from(beta) < tau_eta {
            match self.consistency {
                ConsistencyPolicy::Strict => {
                    return Err(Error::InvalidConfiguration {
                        context: "beta",
                        message: format!(
                            "BETA={} is below TAU*ETA={}; use allow_beta_below_tau_eta to proceed anyway",
                            beta, tau_eta
                        ),
                    })
                }
                ConsistencyPolicy::AllowBetaBelowTauEta => {
                    advisories.push(Advisory::BetaBelowTauEta { beta, tau, eta })
                }
            }
        }

        let effective_beta = match tweak {
            Tweak::RelaxedRejection(RelaxationVariant::DoubledBound) => 2 * u64::from(beta),
            _ => u64::from(beta),
        };
        validate::configuration(
            effective_beta < u64::from(gamma2),
            "beta",
            format!("effective BETA={} leaves no room below GAMMA2={}", effective_beta, gamma2),
        )?;

        if let Tweak::RelaxedRejection(RelaxationVariant::ProbabilisticBypass) = tweak {
            advisories.push(Advisory::NonStandardAcceptance { one_in: BYPASS_ONE_IN });
        }

        if backend == BackendKind::IteratedSha3 {
            let expected_bytes = expected_challenge_bytes(ring_degree, tau, alphabet);
            if expected_bytes * 4.0 > budget_bytes as f64 * 3.0 {
                advisories.push(Advisory::IteratedBudgetTight { expected_bytes, budget_bytes });
            }
        }

        let (default_id, label) = identity(tweak, backend);
        let config_id = self.config_id.unwrap_or(default_id);
        let set = ParameterSet {
            config_id,
            name: self.name.unwrap_or_else(|| format!("Config{}-{}", config_id, label)),
            description: self
                .description
                .unwrap_or_else(|| default_description(tweak, backend).to_string()),
            algorithm_name: self
                .algorithm_name
                .unwrap_or_else(|| format!("Dilithium2-{}", label)),
            ring_degree,
            modulus,
            d,
            k,
            l,
            eta,
            tau,
            omega,
            beta,
            gamma1,
            gamma2,
            backend,
            alphabet,
            tweak,
            consistency: self.consistency,
            sha3_iterations,
            advisories,
        };

        for advisory in &set.advisories {
            warn!(config = %set.name, "{}", advisory);
        }
        debug!(
            config = %set.name,
            tau = set.tau,
            omega = set.omega,
            beta = set.beta,
            backend = set.backend.name(),
            alphabet = ?set.alphabet,
            signature_bytes = set.signature_bytes(),
            "parameter set built"
        );

        Ok(set)
    }
}

/// Exactly one distinct selection must be present
fn exactly_one<T: Copy + PartialEq + core::fmt::Debug>(what: &'static str, selected: &[T]) -> Result<T> {
    let mut distinct: Vec<T> = Vec::with_capacity(selected.len());
    for item in selected {
        if !distinct.contains(item) {
            distinct.push(*item);
        }
    }
    match distinct.as_slice() {
        [only] => Ok(*only),
        [] => Err(Error::InvalidConfiguration {
            context: what,
            message: format!("no {} selected", what),
        }),
        many => Err(Error::InvalidConfiguration {
            context: what,
            message: format!("exactly one {} must be selected, got {:?}", what, many),
        }),
    }
}

/// Number of significant bits in `x`
pub(crate) fn bit_length(x: u32) -> u32 {
    u32::BITS - x.leading_zeros()
}

/// Expected stream bytes consumed by one challenge sampling call.
///
/// Position draws at step `i` succeed with probability `(i+1)/256`; sign words
/// are eight bytes each and hold `64 / bits` draws.
pub fn expected_challenge_bytes(ring_degree: usize, tau: usize, alphabet: AlphabetKind) -> f64 {
    let position_bytes: f64 = ((ring_degree - tau)..ring_degree)
        .map(|i| 256.0 / (i as f64 + 1.0))
        .sum();

    let draws_per_coefficient = match alphabet {
        AlphabetKind::Standard => 1.0,
        AlphabetKind::Expanded(ExpandedMapping::ModFive) => 8.0 / 6.0,
        AlphabetKind::Expanded(ExpandedMapping::UniformRejection) => 2.0,
    };
    let draws_per_word = f64::from(64 / alphabet.bits_per_draw());
    let words = (tau as f64 * draws_per_coefficient / draws_per_word).ceil().max(1.0);

    position_bytes + 8.0 * words
}

fn identity(tweak: Tweak, backend: BackendKind) -> (u8, &'static str) {
    match (tweak, backend) {
        (Tweak::ChallengeBounds, _) => (3, "ChallengeBounds"),
        (Tweak::RelaxedRejection(_), _) => (4, "RejectionSampling"),
        (Tweak::None, BackendKind::IteratedSha3) => (2, "SHA3Challenge"),
        (Tweak::None, BackendKind::Shake256) => (1, "Baseline"),
    }
}

fn default_description(tweak: Tweak, backend: BackendKind) -> &'static str {
    match (tweak, backend) {
        (Tweak::ChallengeBounds, _) => "Dilithium2 with modified TAU and OMEGA",
        (Tweak::RelaxedRejection(_), _) => "Dilithium2 with relaxed rejection bounds",
        (Tweak::None, BackendKind::IteratedSha3) => "Dilithium2 with SHA3-256 challenge generation",
        (Tweak::None, BackendKind::Shake256) => "Original NIST Dilithium2 (No modifications)",
    }
}
