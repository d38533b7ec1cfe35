// tests/challenge_tests.rs
// Known-answer, scenario and distribution tests for the challenge sampler

use dchallenge_api::Seed;
use dchallenge_params::{presets, AlphabetKind, BackendKind, ExpandedMapping, ParameterSet};
use dchallenge_sign::challenge::{
    sample, sample_challenge, sample_with_weight, ChallengePolynomial, ChallengeSampler,
    ExpandedModFive, ExpandedUniform, IteratedSha3Backend, Shake256Backend, Ternary,
};
use dchallenge_sign::{Error, Result};
use dchallenge_tests::distribution::{DistributionConfig, DistributionTester};
use dchallenge_tests::vectors::{load_challenge_vectors, ChallengeVector};

fn run_vector(v: &ChallengeVector) -> Result<(ChallengePolynomial, usize)> {
    let seed = v.seed().unwrap();
    macro_rules! metered {
        ($backend:expr) => {
            match v.alphabet_kind().unwrap() {
                AlphabetKind::Standard => {
                    ChallengeSampler::<_, Ternary>::new($backend).sample_metered(&seed, v.weight)
                }
                AlphabetKind::Expanded(ExpandedMapping::ModFive) => {
                    ChallengeSampler::<_, ExpandedModFive>::new($backend)
                        .sample_metered(&seed, v.weight)
                }
                AlphabetKind::Expanded(ExpandedMapping::UniformRejection) => {
                    ChallengeSampler::<_, ExpandedUniform>::new($backend)
                        .sample_metered(&seed, v.weight)
                }
            }
        };
    }
    match v.backend {
        BackendKind::Shake256 => metered!(Shake256Backend),
        BackendKind::IteratedSha3 => metered!(IteratedSha3Backend::default()),
    }
}

#[test]
fn test_known_answer_vectors() {
    let vectors = load_challenge_vectors().unwrap();
    assert!(vectors.len() >= 10);

    for (i, v) in vectors.iter().enumerate() {
        match (run_vector(v), v.expected_coeffs().unwrap()) {
            (Ok((poly, used)), Some(expected)) => {
                assert_eq!(poly.coeffs(), expected.as_slice(), "vector {} coefficients", i);
                assert_eq!(used, v.bytes_used, "vector {} bytes used", i);
                assert_eq!(poly.weight(), v.weight, "vector {} weight", i);
            }
            (Err(err), None) => {
                assert!(v.exhausted, "vector {} unexpectedly failed: {}", i, err);
                assert_eq!(
                    err,
                    Error::Exhausted {
                        backend: "SHA3-256-iterated",
                        consumed: v.bytes_used
                    }
                );
            }
            (got, expected) => panic!(
                "vector {}: got {:?}, expected {:?}",
                i,
                got.map(|(p, _)| p),
                expected
            ),
        }
    }
}

// Scenario A: zero seed, ternary, weight 39
#[test]
fn test_scenario_zero_seed_ternary() {
    let seed = Seed::zeroed();
    let a = sample(&seed, 39, AlphabetKind::Standard).unwrap();
    let b = sample(&seed, 39, AlphabetKind::Standard).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.ring_degree(), 256);
    assert_eq!(a.weight(), 39);
    assert!(a.nonzero().all(|(_, c)| c == 1 || c == -1));
}

// Scenario B: zero seed, expanded alphabet, weight 39
#[test]
fn test_scenario_zero_seed_expanded() {
    let seed = Seed::zeroed();
    let params = presets::expanded_challenge(ExpandedMapping::ModFive).unwrap();
    let c = sample_challenge(&params, &seed).unwrap();
    assert_eq!(c.weight(), 39);
    assert!(c.nonzero().all(|(_, v)| [-2, -1, 1, 2].contains(&v)));

    let h = c.histogram();
    assert!(h.magnitude_two() > 0);
    // Mod-five mapping favours negative values
    assert!(h.negative() > h.positive());
}

// Scenario C: weight larger than the ring
#[test]
fn test_scenario_oversized_weight() {
    let params = presets::baseline().unwrap();
    let err = sample_with_weight(&params, &Seed::zeroed(), 1000).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidWeight {
            weight: 1000,
            ring_degree: 256
        }
    );
    let api: dchallenge_api::Error = err.into();
    assert!(api.is_configuration());
}

#[test]
fn test_signer_and_verifier_agree() {
    // Both sides derive c from the same seed and parameter set
    for params in presets::all().unwrap() {
        let seed = Seed::new([0xA5; 32]);
        let signer = sample_challenge(&params, &seed).unwrap();
        let verifier = sample_challenge(&params, &seed).unwrap();
        assert_eq!(signer, verifier, "{}", params.name());
    }
}

#[test]
fn test_seeds_produce_distinct_challenges() {
    let tester = DistributionTester::new(DistributionConfig::default().with_seeds(200));
    let mut seen = std::collections::HashSet::new();
    for seed in tester.seeds() {
        let c = sample(&seed, 39, AlphabetKind::Standard).unwrap();
        assert!(seen.insert(c.coeffs().to_vec()));
    }
}

fn sampler_for(params: ParameterSet) -> impl FnMut(&Seed, usize) -> Result<ChallengePolynomial> {
    move |seed: &Seed, weight: usize| sample_with_weight(&params, seed, weight)
}

#[test]
fn test_position_distribution_uniform_shake() {
    let tester = DistributionTester::new(DistributionConfig::for_positions());
    let counts = tester
        .position_counts(256, sampler_for(presets::baseline().unwrap()))
        .unwrap();
    let analysis = tester.chi_square_uniform(&counts);
    assert!(analysis.passes, "{:?}", analysis);
}

#[test]
fn test_position_distribution_uniform_sha3() {
    let tester = DistributionTester::new(DistributionConfig::for_iterated());
    let counts = tester
        .position_counts(256, sampler_for(presets::sha3_challenge().unwrap()))
        .unwrap();
    let analysis = tester.chi_square_uniform(&counts);
    assert!(analysis.passes, "{:?}", analysis);
}

#[test]
fn test_position_distribution_uniform_expanded() {
    let tester = DistributionTester::new(DistributionConfig::for_positions().with_seeds(2000));
    let params = presets::expanded_challenge(ExpandedMapping::UniformRejection).unwrap();
    let counts = tester.position_counts(256, sampler_for(params)).unwrap();
    let analysis = tester.chi_square_uniform(&counts);
    assert!(analysis.passes, "{:?}", analysis);
}

#[test]
fn test_mod_five_matches_known_skew() {
    let tester = DistributionTester::new(DistributionConfig::for_coefficients());
    let params = presets::expanded_challenge(ExpandedMapping::ModFive).unwrap();
    let h = tester.coefficient_histogram(sampler_for(params)).unwrap();
    let observed = [h.count(-2), h.count(-1), h.count(1), h.count(2)];

    // Six surviving raw values: -2 and -1 twice each, 1 and 2 once each
    let skewed = tester.chi_square(&observed, &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0]);
    assert!(skewed.passes, "{:?}", skewed);

    let uniform = tester.chi_square_uniform(&observed);
    assert!(!uniform.passes, "{:?}", uniform);
}

#[test]
fn test_uniform_mapping_is_uniform() {
    let tester = DistributionTester::new(DistributionConfig::for_coefficients());
    let params = presets::expanded_challenge(ExpandedMapping::UniformRejection).unwrap();
    let h = tester.coefficient_histogram(sampler_for(params)).unwrap();
    let observed = [h.count(-2), h.count(-1), h.count(1), h.count(2)];
    let analysis = tester.chi_square_uniform(&observed);
    assert!(analysis.passes, "{:?}", analysis);
}

#[test]
fn test_ternary_signs_balanced() {
    let tester = DistributionTester::new(DistributionConfig::for_coefficients());
    let h = tester
        .coefficient_histogram(sampler_for(presets::baseline().unwrap()))
        .unwrap();
    assert_eq!(h.magnitude_two(), 0);
    let analysis = tester.chi_square_uniform(&[h.count(-1), h.count(1)]);
    assert!(analysis.passes, "{:?}", analysis);
}

#[test]
fn test_expanded_alphabet_is_exercised() {
    let tester = DistributionTester::new(DistributionConfig::default().with_seeds(50));
    for mapping in [ExpandedMapping::ModFive, ExpandedMapping::UniformRejection] {
        let params = presets::expanded_challenge(mapping).unwrap();
        let h = tester.coefficient_histogram(sampler_for(params)).unwrap();
        assert!(h.magnitude_two() > 0, "{:?} never produced magnitude 2", mapping);
        assert_eq!(h.nonzero(), 50 * 39);
    }
}

#[test]
fn test_chi_square_p_value_reference_points() {
    // Upper 5% point of chi-square with 1 and 10 degrees of freedom
    assert!((DistributionTester::p_value(3.841, 1.0) - 0.05).abs() < 1e-3);
    assert!((DistributionTester::p_value(18.307, 10.0) - 0.05).abs() < 1e-3);
}

#[test]
fn test_challenge_json_export() {
    let params = presets::expanded_challenge(ExpandedMapping::ModFive).unwrap();
    let c = sample_challenge(&params, &Seed::new([0x11; 32])).unwrap();

    let json = serde_json::to_value(&c).unwrap();
    let coeffs = json["coeffs"].as_array().unwrap();
    assert_eq!(coeffs.len(), 256);
    assert_eq!(coeffs.iter().filter(|v| v.as_i64() != Some(0)).count(), 39);

    let back: ChallengePolynomial = serde_json::from_value(json).unwrap();
    assert_eq!(back, c);
    assert_eq!(back.histogram(), c.histogram());
}
