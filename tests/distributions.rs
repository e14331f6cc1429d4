use fermi::{
    EngineConfig,
    distribution::{DistributionSpec, Family, Law, Sampler},
    report::percentile,
};
use statrs::distribution::{Beta, ContinuousCDF};

fn interval(family: Family, low: f64, high: f64) -> DistributionSpec {
    DistributionSpec::Interval { family, low, high }
}

fn sorted_draws(spec: &DistributionSpec) -> Vec<f64> {
    let mut sampler = Sampler::new(EngineConfig::seeded(7));
    let mut draws = sampler.sample(spec).unwrap();
    draws.sort_by(f64::total_cmp);
    draws
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!((actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}");
}

#[test]
fn uniform_stays_within_bounds() {
    let draws = sorted_draws(&interval(Family::Uniform, 5.0, 10.0));
    assert_eq!(draws.len(), 100_000);
    assert!(draws[0] >= 5.0);
    assert!(draws[draws.len() - 1] <= 10.0);
    assert_close(percentile(&draws, 0.5), 7.5, 0.05);

    let (p10, p50, p90) =
        (percentile(&draws, 0.1), percentile(&draws, 0.5), percentile(&draws, 0.9));
    assert!(p10 <= p50 && p50 <= p90, "{p10} {p50} {p90}");
    assert_close(p10, 5.5, 0.05);
    assert_close(p90, 9.5, 0.05);
}

#[test]
fn uniform_width_must_be_finite() {
    let config = EngineConfig::default();
    let huge = 1.7e308;

    assert!(Law::resolve(&interval(Family::Uniform, -huge, huge), &config).is_err());
    assert!(Law::resolve(&DistributionSpec::Explicit { family: Family::Uniform,
                                                       first:  -huge,
                                                       second: huge, },
                         &config).is_err());

    let mut sampler = Sampler::new(EngineConfig::seeded(3).with_samples(10));
    assert!(sampler.draw(Law::Uniform { min: -huge, max: huge }).is_err());
    assert!(sampler.sample(&interval(Family::Uniform, -1e307, 1e307)).is_ok());
}

#[test]
fn normal_interval_matches_ci() {
    let draws = sorted_draws(&interval(Family::Normal, 80.0, 120.0));
    assert_close(percentile(&draws, 0.05), 80.0, 80.0 * 0.02);
    assert_close(percentile(&draws, 0.95), 120.0, 120.0 * 0.02);
}

#[test]
fn lognormal_interval_matches_ci() {
    let draws = sorted_draws(&interval(Family::LogNormal, 10.0, 1_000.0));
    assert!(draws[0] > 0.0);
    assert_close(percentile(&draws, 0.05), 10.0, 10.0 * 0.05);
    assert_close(percentile(&draws, 0.95), 1_000.0, 1_000.0 * 0.05);
    assert_close(percentile(&draws, 0.5), 100.0, 100.0 * 0.05);
}

#[test]
fn beta_fit_hits_target_percentiles() {
    let config = EngineConfig::default();
    for (low, high) in [(0.2, 0.6), (0.01, 0.05), (0.9, 0.99), (0.05, 0.95)] {
        let law = Law::resolve(&interval(Family::Beta, low, high), &config).unwrap();
        let Law::Beta { alpha, beta } = law else {
            panic!("expected a beta law for {low} {high}");
        };
        assert!(alpha > 0.0 && beta > 0.0);

        let fitted = Beta::new(alpha, beta).unwrap();
        assert_close(fitted.inverse_cdf(0.05), low, 1e-3);
        assert_close(fitted.inverse_cdf(0.95), high, 1e-3);
    }
}

#[test]
fn narrow_beta_intervals_fit() {
    for (low, high) in [(0.1, 0.1001), (0.5, 0.5001), (0.9, 0.90001)] {
        let spec = interval(Family::Beta, low, high);
        let law = Law::resolve(&spec, &EngineConfig::default())
            .unwrap_or_else(|e| panic!("{low} {high}: {e}"));
        assert!(matches!(law, Law::Beta { .. }));

        let draws = sorted_draws(&spec);
        let width = high - low;
        assert_close(percentile(&draws, 0.05), low, width * 0.1);
        assert_close(percentile(&draws, 0.95), high, width * 0.1);
    }
}

#[test]
fn beta_samples_match_ci() {
    let draws = sorted_draws(&interval(Family::Beta, 0.2, 0.6));
    assert!(draws[0] > 0.0 && draws[draws.len() - 1] < 1.0);
    assert_close(percentile(&draws, 0.05), 0.2, 0.01);
    assert_close(percentile(&draws, 0.95), 0.6, 0.01);
}

#[test]
fn beta_rejects_bad_bounds() {
    let config = EngineConfig::default();
    assert!(Law::resolve(&interval(Family::Beta, 0.6, 0.2), &config).is_err());
    assert!(Law::resolve(&interval(Family::Beta, 0.4, 0.4), &config).is_err());
    assert!(Law::resolve(&interval(Family::Beta, 0.0, 0.5), &config).is_err());
    assert!(Law::resolve(&interval(Family::Beta, 0.5, 1.0), &config).is_err());
    assert!(Law::resolve(&interval(Family::Beta, -0.1, 1.5), &config).is_err());
}

#[test]
fn intervals_require_ordered_bounds() {
    let config = EngineConfig::default();
    for family in [Family::Uniform, Family::Normal, Family::LogNormal] {
        assert!(Law::resolve(&interval(family, 10.0, 5.0), &config).is_err());
        assert!(Law::resolve(&interval(family, 5.0, 5.0), &config).is_err());
    }
    assert!(Law::resolve(&interval(Family::LogNormal, -1.0, 5.0), &config).is_err());
}

#[test]
fn explicit_parameters_pass_through() {
    let config = EngineConfig::default();
    let explicit = |family, first, second| {
        Law::resolve(&DistributionSpec::Explicit { family, first, second }, &config)
    };

    assert_eq!(explicit(Family::Normal, 10.0, 2.0).unwrap(),
               Law::Normal { mean: 10.0, std_dev: 2.0 });
    assert_eq!(explicit(Family::Beta, 2.0, 5.0).unwrap(),
               Law::Beta { alpha: 2.0, beta: 5.0 });
    assert_eq!(explicit(Family::Uniform, 1.0, 3.0).unwrap(),
               Law::Uniform { min: 1.0, max: 3.0 });
    assert!(explicit(Family::Normal, 10.0, 0.0).is_err());
    assert!(explicit(Family::Beta, 0.0, 1.0).is_err());
    assert!(explicit(Family::LogNormal, -1.0, 1.0).is_err());
}

#[test]
fn same_seed_same_draws() {
    let spec = interval(Family::LogNormal, 1.0, 10.0);
    let config = EngineConfig::seeded(99).with_samples(1_000);

    let first = Sampler::new(config.clone()).sample(&spec).unwrap();
    let second = Sampler::new(config).sample(&spec).unwrap();
    assert_eq!(first, second);

    let other = Sampler::new(EngineConfig::seeded(100).with_samples(1_000)).sample(&spec)
                                                                          .unwrap();
    assert_ne!(first, other);
}

#[test]
fn every_literal_gets_fresh_draws() {
    let spec = interval(Family::Uniform, 0.0, 1.0);
    let mut sampler = Sampler::new(EngineConfig::seeded(1).with_samples(100));
    let first = sampler.sample(&spec).unwrap();
    let second = sampler.sample(&spec).unwrap();
    assert_ne!(first, second);
}
