//! Errors raised while loading fixtures and vectors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The fixture parsed but describes an invalid parameter set
    #[error(transparent)]
    Params(#[from] dchallenge_api::Error),

    #[error("malformed vector: {0}")]
    Vector(String),
}
