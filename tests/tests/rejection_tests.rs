// tests/rejection_tests.rs
// Rejection loop driven by real challenges and simulated secrets

use dchallenge_api::{RejectionOutcome, Seed};
use dchallenge_params::{presets, ParameterSet, RelaxationVariant};
use dchallenge_sign::challenge::{sample_challenge, ChallengePolynomial};
use dchallenge_sign::rejection::{Candidate, Policy, RejectionLoop, RejectionStats};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Negacyclic product of a sparse challenge with a small polynomial
fn mul_sparse(c: &ChallengePolynomial, s: &[i64]) -> Vec<i64> {
    let n = s.len();
    let mut out = vec![0i64; n];
    for (j, cj) in c.nonzero() {
        let cj = i64::from(cj);
        for (i, &si) in s.iter().enumerate() {
            let k = i + j;
            if k < n {
                out[k] += cj * si;
            } else {
                out[k - n] -= cj * si;
            }
        }
    }
    out
}

fn small_poly(rng: &mut ChaCha20Rng, n: usize, eta: i64) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(-eta..=eta)).collect()
}

struct Signer {
    params: ParameterSet,
    s1: Vec<Vec<i64>>,
    s2: Vec<Vec<i64>>,
    rng: ChaCha20Rng,
}

impl Signer {
    fn new(params: ParameterSet, seed: u8) -> Self {
        let mut rng = ChaCha20Rng::from_seed([seed; 32]);
        let n = params.ring_degree();
        let eta = i64::from(params.eta());
        let s1 = (0..params.l()).map(|_| small_poly(&mut rng, n, eta)).collect();
        let s2 = (0..params.k()).map(|_| small_poly(&mut rng, n, eta)).collect();
        Self { params, s1, s2, rng }
    }

    /// One candidate: fresh challenge seed, fresh masking, norms of z and r0
    fn attempt(&mut self) -> dchallenge_sign::Result<Candidate<Seed>> {
        let seed = Seed::random(&mut self.rng);
        let c = sample_challenge(&self.params, &seed)?;
        let gamma1 = i64::from(self.params.gamma1());
        let gamma2 = i64::from(self.params.gamma2());

        let mut z_norm = 0i64;
        for s in &self.s1 {
            for cs in mul_sparse(&c, s) {
                let y = self.rng.gen_range(-(gamma1 - 1)..=gamma1);
                z_norm = z_norm.max((y + cs).abs());
            }
        }

        let mut lowbits_norm = 0i64;
        for s in &self.s2 {
            for cs in mul_sparse(&c, s) {
                let r0 = self.rng.gen_range(-(gamma2 - 1)..=gamma2);
                lowbits_norm = lowbits_norm.max((r0 - cs).abs());
            }
        }

        Ok(Candidate {
            value: seed,
            z_norm,
            lowbits_norm,
            hint_count: 0,
        })
    }
}

fn rejection_rate(params: ParameterSet, signatures: usize) -> (f64, u64) {
    let stats = RejectionStats::new();
    let policy = Policy::for_params(&params, ChaCha20Rng::from_seed([9u8; 32])).unwrap();
    let mut driver = RejectionLoop::for_params(policy, &params).with_observer(&stats);
    let mut signer = Signer::new(params, 1);

    for _ in 0..signatures {
        let accepted = driver.run(|_| signer.attempt()).unwrap();
        assert!(accepted.attempts >= 1);
    }
    let snapshot = stats.snapshot();
    (snapshot.rejection_rate(), snapshot.bypassed)
}

#[test]
fn test_cs1_bounded_by_beta() {
    let params = presets::baseline().unwrap();
    let mut signer = Signer::new(params.clone(), 3);
    for i in 0..20u8 {
        let c = sample_challenge(&params, &Seed::new([i; 32])).unwrap();
        for s in &signer.s1 {
            let norm = mul_sparse(&c, s).iter().map(|x| x.abs()).max().unwrap();
            assert!(norm <= i64::from(params.rejection_bound()));
        }
    }
    assert!(signer.attempt().is_ok());
}

#[test]
fn test_baseline_loop_terminates() {
    let (rate, bypassed) = rejection_rate(presets::baseline().unwrap(), 30);
    assert!(rate > 0.3 && rate < 0.95, "rejection rate {}", rate);
    assert_eq!(bypassed, 0);
}

#[test]
fn test_doubled_bound_rejects_more() {
    let (increased, _) =
        rejection_rate(presets::relaxed_rejection(RelaxationVariant::IncreasedBound).unwrap(), 30);
    let (doubled, _) =
        rejection_rate(presets::relaxed_rejection(RelaxationVariant::DoubledBound).unwrap(), 30);
    assert!(doubled > increased, "doubled {} vs increased {}", doubled, increased);
}

#[test]
fn test_bypass_policy_reports_bypasses() {
    let params = presets::relaxed_rejection(RelaxationVariant::ProbabilisticBypass).unwrap();
    let (_, bypassed) = rejection_rate(params, 30);
    assert!(bypassed > 0);
}

#[test]
fn test_accepted_challenge_reproducible_from_seed() {
    let params = presets::challenge_bounds().unwrap();
    let mut signer = Signer::new(params.clone(), 5);
    let mut driver = RejectionLoop::for_params(dchallenge_sign::BoundPolicy, &params);
    let accepted = driver.run(|_| signer.attempt()).unwrap();
    assert_eq!(accepted.outcome, RejectionOutcome::Accepted);

    // A verifier only sees the seed
    let c = sample_challenge(&params, &accepted.value).unwrap();
    assert_eq!(c.weight(), 50);
}
