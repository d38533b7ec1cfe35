// tests/params_tests.rs
// Parameter sets loaded from the TOML fixtures in configs/

use dchallenge_api::Error;
use dchallenge_params::{
    presets, AcceptanceMode, Advisory, AlphabetKind, BackendKind, ExpandedMapping,
    RelaxationVariant, Tweak,
};
use dchallenge_sign::challenge::challenge_self_test;
use dchallenge_tests::fixtures::{fixture_names, load_parameter_set, load_raw};
use dchallenge_tests::FixtureError;

fn config_error(name: &str) -> &'static str {
    match load_parameter_set(name) {
        Err(FixtureError::Params(Error::InvalidConfiguration { context, .. })) => context,
        other => panic!("{}: expected a configuration error, got {:?}", name, other),
    }
}

#[test]
fn test_fixtures_match_presets() {
    let baseline = load_parameter_set("config1_baseline").unwrap();
    assert_eq!(baseline.config_id(), 1);
    assert_eq!(baseline.algorithm_name(), "Dilithium2");
    assert_eq!(baseline.public_key_bytes(), 1312);
    assert_eq!(baseline.secret_key_bytes(), 2560);
    assert_eq!(baseline.signature_bytes(), 2420);
    assert_eq!(baseline.challenge_weight(), presets::baseline().unwrap().challenge_weight());

    assert_eq!(
        load_parameter_set("config2_sha3_challenge").unwrap(),
        presets::sha3_challenge().unwrap()
    );
    assert_eq!(
        load_parameter_set("config3_challenge_bounds").unwrap(),
        presets::challenge_bounds().unwrap()
    );
    assert_eq!(
        load_parameter_set("config3_challenge_bounds").unwrap().signature_bytes(),
        2410
    );
    assert_eq!(
        load_parameter_set("config4_relaxed_bypass").unwrap(),
        presets::relaxed_rejection(RelaxationVariant::ProbabilisticBypass).unwrap()
    );
}

#[test]
fn test_fixture_contents() {
    let sha3 = load_parameter_set("config2_sha3_challenge").unwrap();
    assert_eq!(sha3.backend(), BackendKind::IteratedSha3);
    assert_eq!(sha3.sha3_iterations(), 4);

    let doubled = load_parameter_set("config4_relaxed_doubled").unwrap();
    assert_eq!(doubled.tweak(), Tweak::RelaxedRejection(RelaxationVariant::DoubledBound));
    assert_eq!(doubled.lowbits_bound(), 95232 - 200);

    let bypass = load_parameter_set("config4_relaxed_bypass").unwrap();
    assert_eq!(bypass.acceptance_mode(), AcceptanceMode::Bypass { one_in: 10 });

    let expanded = load_parameter_set("config5_expanded").unwrap();
    assert_eq!(expanded.alphabet(), AlphabetKind::Expanded(ExpandedMapping::ModFive));
    assert_eq!(expanded.name(), "Config5-ExpandedChallenge");
    assert_eq!(expanded.signature_bytes(), 2420);
}

#[test]
fn test_experimental_fixture_carries_advisory() {
    let p = load_parameter_set("experimental_low_beta").unwrap();
    assert_eq!(
        p.advisories(),
        &[Advisory::BetaBelowTauEta {
            beta: 60,
            tau: 39,
            eta: 2
        }]
    );
}

#[test]
fn test_invalid_fixtures_rejected() {
    assert_eq!(config_error("invalid_both_tweaks"), "tweaks");
    assert_eq!(config_error("invalid_no_backend"), "randomness backend");
    assert_eq!(config_error("invalid_two_backends"), "randomness backend");
    assert_eq!(config_error("invalid_two_alphabets"), "coefficient alphabet");
    assert_eq!(config_error("invalid_tau_range"), "tau");
    assert_eq!(config_error("invalid_low_beta_strict"), "beta");
}

#[test]
fn test_unknown_keys_rejected() {
    let err = toml::from_str::<dchallenge_params::RawParameters>("use_shake = true").unwrap_err();
    assert!(err.to_string().contains("use_shake"));
}

#[test]
fn test_raw_flags_parse() {
    let raw = load_raw("invalid_both_tweaks").unwrap();
    assert!(raw.modified_challenge_bounds);
    assert!(raw.relaxed_rejection);
    assert!(raw.use_shake256);
    assert!(!raw.use_sha3_256);
    assert_eq!(raw.tau, None);
}

#[test]
fn test_every_valid_fixture_self_tests() {
    for name in fixture_names().unwrap() {
        if name.starts_with("invalid_") {
            continue;
        }
        let params = load_parameter_set(&name).unwrap();
        let histogram = challenge_self_test(&params).unwrap();
        assert!(histogram.nonzero() > 0, "{}", name);
    }
}
