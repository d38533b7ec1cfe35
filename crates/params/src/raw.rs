//! Flag-style parameter description
//!
//! [`RawParameters`] mirrors a parameter header: independent on/off flags and
//! optional numeric overrides. Nothing in it is trusted; conversion to
//! [`ParameterSet`] runs the builder, so conflicting or missing flags are
//! rejected there.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use dchallenge_api::{Error, Result};

use crate::set::{ExpandedMapping, ParameterSet, RelaxationVariant};

/// Unvalidated parameter description, typically deserialized from a file
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default, deny_unknown_fields))]
pub struct RawParameters {
    pub config_id: Option<u8>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub algorithm_name: Option<String>,

    pub ring_degree: Option<usize>,
    pub modulus: Option<u32>,
    pub d: Option<u32>,
    pub k: Option<usize>,
    pub l: Option<usize>,
    pub eta: Option<u32>,
    pub tau: Option<usize>,
    pub omega: Option<usize>,
    pub beta: Option<u32>,
    pub gamma1: Option<u32>,
    pub gamma2: Option<u32>,
    pub sha3_iterations: Option<usize>,

    pub use_shake256: bool,
    pub use_sha3_256: bool,
    pub standard_challenge: bool,
    pub expanded_challenge: bool,
    pub expanded_mapping: Option<ExpandedMapping>,
    pub modified_challenge_bounds: bool,
    pub relaxed_rejection: bool,
    pub relaxation_variant: Option<RelaxationVariant>,
    pub allow_beta_below_tau_eta: bool,
}

impl TryFrom<RawParameters> for ParameterSet {
    type Error = Error;

    fn try_from(raw: RawParameters) -> Result<Self> {
        if raw.expanded_mapping.is_some() && !raw.expanded_challenge {
            return Err(Error::InvalidConfiguration {
                context: "expanded_mapping",
                message: "expanded_mapping is set but expanded_challenge is off".into(),
            });
        }
        if raw.relaxation_variant.is_some() && !raw.relaxed_rejection {
            return Err(Error::InvalidConfiguration {
                context: "relaxation_variant",
                message: "relaxation_variant is set but relaxed_rejection is off".into(),
            });
        }

        let mut builder = ParameterSet::builder();

        macro_rules! forward {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = raw.$field {
                    builder = builder.$field(value);
                })*
            };
        }
        forward!(
            config_id, name, description, algorithm_name, ring_degree, modulus, d, k, l, eta, tau,
            omega, beta, gamma1, gamma2, sha3_iterations,
        );

        if raw.use_shake256 {
            builder = builder.use_shake256();
        }
        if raw.use_sha3_256 {
            builder = builder.use_sha3_256();
        }
        if raw.standard_challenge {
            builder = builder.standard_challenge();
        }
        if raw.expanded_challenge {
            builder = builder.expanded_challenge(raw.expanded_mapping.unwrap_or_default());
        }
        if raw.modified_challenge_bounds {
            builder = builder.modified_challenge_bounds();
        }
        if raw.relaxed_rejection {
            builder = builder.relaxed_rejection(raw.relaxation_variant.unwrap_or_default());
        }
        if raw.allow_beta_below_tau_eta {
            builder = builder.allow_beta_below_tau_eta();
        }

        builder.build()
    }
}
