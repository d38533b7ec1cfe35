//! Statistical checks on sampled challenges

pub mod tester;

pub use config::DistributionConfig;
pub use tester::{ChiSquareAnalysis, DistributionTester};
