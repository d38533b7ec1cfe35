//! Capability traits injected into the challenge sampler and the signing loop

pub mod alphabet;
pub mod rejection;
pub mod stream;

pub use alphabet::CoefficientAlphabet;
pub use rejection::{AcceptancePolicy, RejectionObserver, RejectionOutcome};
pub use stream::{ByteStream, RandomnessBackend};
