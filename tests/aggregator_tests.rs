use zkcost::aggregator::{aggregate, aggregate_with, summarize, AggregateOptions};
use zkcost::classifier::zkalc_probes;
use zkcost::model::build_all;
use zkcost::parser::{IterationTrace, RawSample};
use zkcost::utils::error::AggregateError;

#[test]
fn test_unclassifiable_sample_is_skipped() {
    let registry = zkalc_probes().unwrap();
    let samples = vec![
        RawSample::new("bn254/msm_G1/16", 1.0, "ms"),
        RawSample::new("Gnuplot not found, using plotters backend", 1.0, "ns"),
        RawSample::new("bn254/pairing", 900.0, "µs"),
    ];

    let aggregation = aggregate_with(&samples, &registry, AggregateOptions::default()).unwrap();
    assert_eq!(aggregation.classified, 2);
    assert_eq!(aggregation.skipped.len(), 1);

    let models = build_all(&aggregation.series).unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models["msm_G1"].predict(16), 1_000_000.0);
    assert_eq!(models["pairing"].predict(1), 900_000.0);
}

#[test]
fn test_unknown_unit_aborts_batch() {
    let registry = zkalc_probes().unwrap();
    let samples = vec![
        RawSample::new("bn254/add_ff", 10.0, "ns"),
        RawSample::new("bn254/mul_ff", 10.0, "cycles"),
    ];

    assert_eq!(
        aggregate(&samples, &registry),
        Err(AggregateError::UnknownUnit {
            sample: "bn254/mul_ff".to_string(),
            unit: "cycles".to_string(),
        })
    );
}

#[test]
fn test_unknown_unit_aborts_even_when_unclassifiable() {
    let registry = zkalc_probes().unwrap();
    let samples = vec![RawSample::new("not a benchmark", 1.0, "furlongs")];

    assert!(matches!(
        aggregate(&samples, &registry),
        Err(AggregateError::UnknownUnit { .. })
    ));
}

#[test]
fn test_series_sorted_and_last_write_wins() {
    let registry = zkalc_probes().unwrap();
    let samples = vec![
        RawSample::new("bn254/msm_G1/256", 4.0, "ms"),
        RawSample::new("bn254/msm_G1/16", 1.0, "ms"),
        RawSample::new("bn254/msm_G1/64", 2.0, "ms"),
        RawSample::new("bn254/msm_G1/16", 1.5, "ms"),
    ];

    let series = aggregate(&samples, &registry).unwrap();
    let msm = &series["msm_G1"];

    assert_eq!(msm.sizes(), vec![16, 64, 256]);
    assert_eq!(msm.times(), vec![1_500_000.0, 2_000_000.0, 4_000_000.0]);
}

#[test]
fn test_no_empty_series() {
    let registry = zkalc_probes().unwrap();
    let samples = vec![RawSample::new("unrelated", 1.0, "ns")];

    let series = aggregate(&samples, &registry).unwrap();
    assert!(series.is_empty());
}

#[test]
fn test_repetitions_amortize_time() {
    let registry = zkalc_probes().unwrap();
    let samples = vec![RawSample::new("bn254/add_G1", 2.0, "µs").with_repetitions(1000)];

    let series = aggregate(&samples, &registry).unwrap();
    assert_eq!(series["add_G1"].times(), vec![2.0]);
}

#[test]
fn test_stddev_is_carried_when_requested() {
    let registry = zkalc_probes().unwrap();
    let trace = IterationTrace {
        unit: "ns".to_string(),
        measured_values: vec![90.0, 220.0],
        iteration_counts: vec![1.0, 2.0],
    };
    // Per-iteration times 90 and 110 around a mean of 100
    let samples = vec![RawSample::new("bn254/mul_ff", 100.0, "ns").with_iterations(trace)];

    let without = aggregate(&samples, &registry).unwrap();
    assert_eq!(without["mul_ff"].stddevs(), None);

    let options = AggregateOptions::default().with_stddev(true);
    let with = aggregate_with(&samples, &registry, options).unwrap();
    assert_eq!(with.series["mul_ff"].stddevs(), Some(vec![10.0]));
}

#[test]
fn test_summary() {
    let registry = zkalc_probes().unwrap();
    let samples = vec![
        RawSample::new("bn254/msm_G1/16", 1.0, "ms"),
        RawSample::new("bn254/msm_G1/32", 1.5, "ms"),
        RawSample::new("bn254/pairing", 1.0, "ms"),
        RawSample::new("noise", 1.0, "ms"),
    ];

    let aggregation = aggregate_with(&samples, &registry, AggregateOptions::default()).unwrap();
    let summary = summarize(&aggregation);

    assert_eq!(summary.operations, 2);
    assert_eq!(summary.points, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.single_point_operations, 1);
    assert!(summary.summary().contains("Skipped: 1"));
}
