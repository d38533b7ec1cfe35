use dchallenge_api::Seed;
use dchallenge_sign::{ChallengePolynomial, CoefficientHistogram, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use super::config::DistributionConfig;

// Result of a goodness-of-fit test
#[derive(Debug, Clone)]
pub struct ChiSquareAnalysis {
    pub statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub significance: f64,
    pub passes: bool,
}

pub struct DistributionTester {
    pub config: DistributionConfig,
}

impl DistributionTester {
    pub fn new(config: DistributionConfig) -> Self {
        Self { config }
    }

    /// Deterministic seeds drawn from the configured ChaCha20 stream
    pub fn seeds(&self) -> impl Iterator<Item = Seed> {
        let mut rng = ChaCha20Rng::from_seed(self.config.rng_seed);
        (0..self.config.num_seeds).map(move |_| Seed::random(&mut rng))
    }

    /// Count, per index, how often a coefficient was non-zero
    pub fn position_counts<F>(&self, ring_degree: usize, mut sample: F) -> Result<Vec<u64>>
    where
        F: FnMut(&Seed, usize) -> Result<ChallengePolynomial>,
    {
        let mut counts = vec![0u64; ring_degree];
        for seed in self.seeds() {
            let poly = sample(&seed, self.config.weight)?;
            for (index, _) in poly.nonzero() {
                counts[index] += 1;
            }
        }
        Ok(counts)
    }

    /// Accumulate coefficient values over every configured seed
    pub fn coefficient_histogram<F>(&self, mut sample: F) -> Result<CoefficientHistogram>
    where
        F: FnMut(&Seed, usize) -> Result<ChallengePolynomial>,
    {
        let mut histogram = CoefficientHistogram::new();
        for seed in self.seeds() {
            histogram.record(&sample(&seed, self.config.weight)?);
        }
        Ok(histogram)
    }

    /// Pearson chi-square statistic of `observed` against `probabilities`
    pub fn chi_square(&self, observed: &[u64], probabilities: &[f64]) -> ChiSquareAnalysis {
        assert_eq!(observed.len(), probabilities.len(), "bin count mismatch");
        let total: u64 = observed.iter().sum();

        let statistic: f64 = observed
            .iter()
            .zip(probabilities)
            .map(|(&o, &p)| {
                let expected = total as f64 * p;
                let d = o as f64 - expected;
                d * d / expected
            })
            .sum();

        let degrees_of_freedom = (observed.len() - 1) as f64;
        let p_value = Self::p_value(statistic, degrees_of_freedom);

        ChiSquareAnalysis {
            statistic,
            degrees_of_freedom,
            p_value,
            significance: self.config.significance,
            passes: p_value >= self.config.significance,
        }
    }

    /// Chi-square against equal probabilities in every bin
    pub fn chi_square_uniform(&self, observed: &[u64]) -> ChiSquareAnalysis {
        let p = 1.0 / observed.len() as f64;
        self.chi_square(observed, &vec![p; observed.len()])
    }

    // Upper-tail probability of the chi-square distribution
    pub fn p_value(statistic: f64, degrees_of_freedom: f64) -> f64 {
        match ChiSquared::new(degrees_of_freedom) {
            Ok(dist) => (1.0 - dist.cdf(statistic)).clamp(0.0, 1.0),
            Err(_) => 0.0,
        }
    }
}
