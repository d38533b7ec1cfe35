//! Validation helpers shared by the parameter layer and the sampler

use super::{Error, Result};

/// Validate a configuration-level condition
#[inline(always)]
pub fn configuration(
    condition: bool,
    context: &'static str,
    message: impl Into<String>,
) -> Result<()> {
    if !condition {
        return Err(Error::InvalidConfiguration {
            context,
            message: message.into(),
        });
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
