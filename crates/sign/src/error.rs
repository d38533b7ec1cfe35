//! Error types for the sampler and the rejection policies

use thiserror::Error as ThisError;

/// Errors that can occur while sampling challenges or running the rejection loop
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Requested challenge weight is zero or exceeds the ring degree
    #[error("Invalid challenge weight {weight}: must be in [1, {ring_degree}]")]
    InvalidWeight { weight: usize, ring_degree: usize },

    /// The randomness backend ran out of its byte budget
    #[error("{backend} exhausted after {consumed} bytes")]
    Exhausted {
        backend: &'static str,
        consumed: usize,
    },

    /// The sampler hit its draw ceiling before placing every coefficient
    #[error("Draw limit of {limit} bytes exceeded while sampling")]
    DrawLimitExceeded { limit: usize },

    /// The rejection loop gave up
    #[error("No candidate accepted after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    /// Parameter set or selection is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// RNG error
    #[error("RNG error: {0}")]
    Rng(String),

    /// Sampling error
    #[error("Sampling error: {0}")]
    Sampling(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

// Convert from api::Error
impl From<dchallenge_api::Error> for Error {
    fn from(err: dchallenge_api::Error) -> Self {
        use dchallenge_api::Error as ApiError;

        match err {
            ApiError::InvalidConfiguration { context, message } => {
                Error::Configuration(format!("{}: {}", context, message))
            }
            // Streams report exhaustion through the api error; the sampler
            // re-labels it with the backend name before it gets here
            ApiError::Exhausted { context, .. } => Error::Exhausted {
                backend: context,
                consumed: 0,
            },
            ApiError::RandomGenerationError { context, message } => {
                Error::Rng(format!("{}: {}", context, message))
            }
            ApiError::InvalidParameter { context, message } => {
                Error::Sampling(format!("{}: {}", context, message))
            }
            other => Error::Internal(other.to_string()),
        }
    }
}

// Convert to api::Error
impl From<Error> for dchallenge_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidWeight { .. } => dchallenge_api::Error::InvalidConfiguration {
                context: "challenge weight",
                message: err.to_string(),
            },
            Error::Exhausted { backend, .. } => dchallenge_api::Error::Exhausted {
                context: backend,
                message: err.to_string(),
            },
            Error::DrawLimitExceeded { .. } => dchallenge_api::Error::Exhausted {
                context: "draw limit",
                message: err.to_string(),
            },
            Error::AttemptsExhausted { .. } => dchallenge_api::Error::Exhausted {
                context: "rejection loop",
                message: err.to_string(),
            },
            Error::Configuration(message) => dchallenge_api::Error::InvalidConfiguration {
                context: "sign",
                message,
            },
            Error::Rng(message) => dchallenge_api::Error::RandomGenerationError {
                context: "rng",
                message,
            },
            Error::Sampling(message) => dchallenge_api::Error::Other {
                context: "sampling",
                message,
            },
            Error::Internal(message) => dchallenge_api::Error::Other {
                context: "internal",
                message,
            },
        }
    }
}

impl Error {
    /// True for errors a caller must treat as a refusal to operate
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::InvalidWeight { .. } | Error::Configuration(_))
    }

    /// True when randomness or attempts ran out
    pub fn is_exhaustion(&self) -> bool {
        matches!(
            self,
            Error::Exhausted { .. } | Error::DrawLimitExceeded { .. } | Error::AttemptsExhausted { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, Error>;
