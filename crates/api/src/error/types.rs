//! Error type definitions for challenge sampling and parameter handling

use thiserror::Error as ThisError;

/// Primary error type at the dchallenge API boundary
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A single argument is out of its allowed range
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A parameter set or tweak selection is inconsistent.
    ///
    /// Always fatal: nothing may be sampled or signed under such a configuration.
    #[error("Invalid configuration: {context}: {message}")]
    InvalidConfiguration {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A randomness source ran out of its byte budget before the caller was done
    #[error("Randomness exhausted: {context}: {message}")]
    Exhausted {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for dchallenge operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidConfiguration { message, .. } => {
                Self::InvalidConfiguration { context, message }
            }
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Exhausted { message, .. } => Self::Exhausted { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error, keeping its context
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::InvalidConfiguration { context, .. } => {
                Self::InvalidConfiguration { context, message }
            }
            // Lengths carry no free-form message
            Self::InvalidLength { context, expected, actual } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Exhausted { context, .. } => Self::Exhausted { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidParameter { context, .. }
            | Self::InvalidConfiguration { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::Exhausted { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    /// True for errors that must stop a caller from producing keys or signatures
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// True when a randomness budget or draw ceiling was hit
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}
