//! Rejection-acceptance policies for the signing loop
//!
//! [`BoundPolicy`] is the standard `norm < bound` test. [`BypassPolicy`] adds a
//! one-in-N escape hatch for failed candidates and reports itself as
//! non-standard. [`RejectionLoop`] drives attempts against the bounds of a
//! parameter set and reports outcomes to an optional observer such as
//! [`RejectionStats`].

mod driver;
mod policy;
mod stats;

pub use driver::{Accepted, Candidate, RejectionLoop};
pub use policy::{BoundPolicy, BypassPolicy, Policy, RejectionBounds};
pub use stats::{RejectionSnapshot, RejectionStats};
