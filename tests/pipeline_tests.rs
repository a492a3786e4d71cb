use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use zkcost::aggregator::AggregateOptions;
use zkcost::classifier::{registry_for, zkalc_probes};
use zkcost::commands::{execute_fit, FitArgs};
use zkcost::output::{read_document, write_document, CostDocument};
use zkcost::parser::{read_samples, Harness, RawSample};
use zkcost::pipeline::fit_samples;

fn msm_samples() -> Vec<RawSample> {
    vec![
        RawSample::new("bls12_381/msm_G1/16", 1.2, "ms"),
        RawSample::new("bls12_381/msm_G1/32", 1.3, "ms"),
        RawSample::new("bls12_381/msm_G1/64", 2.0, "ms"),
        RawSample::new("bls12_381/msm_G1/1024", 17.2, "ms"),
        RawSample::new("bls12_381/msm_G2/16", 2.4, "ms"),
        RawSample::new("bls12_381/msm_G2/1024", 49.3, "ms"),
        RawSample::new("bls12_381/mul_ff", 38.7, "ns"),
        RawSample::new("bls12_381/pairing", 1.1, "ms"),
        RawSample::new("bls12_381/hash_to_G1", 120.0, "µs"),
    ]
}

#[test]
fn test_round_trip_reproduces_measured_times() {
    let registry = zkalc_probes().unwrap();
    let outcome = fit_samples(&msm_samples(), &registry, AggregateOptions::default(), true).unwrap();

    let json = outcome.document.to_json_string().unwrap();
    let reparsed = CostDocument::from_json_str(&json).unwrap();
    let models = reparsed.import().unwrap();

    assert_eq!(models, outcome.models);

    for (operation, series) in &outcome.aggregation.series {
        let model = &models[operation];
        for (size, time_ns) in series.points() {
            assert_eq!(model.predict(size), time_ns, "{} at size {}", operation, size);
        }
    }
}

#[test]
fn test_single_sample_round_trip_is_exact() {
    let registry = zkalc_probes().unwrap();
    let samples = vec![RawSample::new("bn254/msm_G1/11", 0.1, "ns")];
    let outcome = fit_samples(&samples, &registry, AggregateOptions::default(), false).unwrap();

    let json = outcome.document.to_json_string().unwrap();
    let reparsed = CostDocument::from_json_str(&json).unwrap();
    reparsed.import().unwrap();

    assert_eq!(reparsed.predict("msm_G1", 11), Some(0.1));
}

#[test]
fn test_round_trip_extrapolation_is_stable() {
    let registry = zkalc_probes().unwrap();
    let outcome = fit_samples(&msm_samples(), &registry, AggregateOptions::default(), false).unwrap();

    let mut document = outcome.document.clone();
    for _ in 0..3 {
        let json = document.to_json_string().unwrap();
        document = CostDocument::from_json_str(&json).unwrap();
    }

    for size in [1, 3, 5000, 1 << 20] {
        let original = outcome.document.predict("msm_G1", size).unwrap();
        let cycled = document.predict("msm_G1", size).unwrap();
        assert_eq!(original.to_bits(), cycled.to_bits(), "size {}", size);
        assert_eq!(cycled.to_bits(), document.predict("msm_G1", size).unwrap().to_bits());
    }

    assert_eq!(document, outcome.document);
}

#[test]
fn test_document_entries_carry_samples() {
    let registry = zkalc_probes().unwrap();
    let outcome = fit_samples(&msm_samples(), &registry, AggregateOptions::default(), true).unwrap();

    let entry = outcome.document.get("msm_G2").unwrap();
    assert_eq!(entry.range, Some(vec![16, 1024]));
    assert_eq!(entry.results, Some(vec![2_400_000.0, 49_300_000.0]));
    assert_eq!(entry.stddev, None);
    assert!(outcome.document.get("hash_to_G1").is_none());
    assert_eq!(outcome.aggregation.skipped, vec!["bls12_381/hash_to_G1".to_string()]);
}

#[test]
fn test_document_file_round_trip() {
    let registry = zkalc_probes().unwrap();
    let outcome = fit_samples(&msm_samples(), &registry, AggregateOptions::default(), true).unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("models.json");
    write_document(&outcome.document, &path).unwrap();

    let loaded = read_document(&path).unwrap();
    assert_eq!(loaded, outcome.document);
    assert_eq!(loaded.predict("mul_ff", 1), Some(38.7));
}

#[test]
fn test_criterion_output_end_to_end() {
    let input = r#"{"reason":"group-complete","group_name":"msm","benchmarks":[]}
{"reason":"benchmark-complete","id":"bn254/msm_G1/16","unit":"ns","mean":{"estimate":1.5,"unit":"ms"},"iteration_count":[1,2],"measured_values":[1400000.0,3200000.0]}
{"reason":"benchmark-complete","id":"bn254/msm_G1/32","unit":"ns","mean":{"estimate":2.5,"unit":"ms"},"iteration_count":[1],"measured_values":[2500000.0]}
{"reason":"benchmark-complete","id":"bn254/add_ff","unit":"ns","mean":{"estimate":4.0,"unit":"ns"},"iteration_count":[10],"measured_values":[40.0]}
"#;

    let samples = read_samples(input.as_bytes(), Harness::Criterion).unwrap();
    assert_eq!(samples.len(), 3);

    let registry = registry_for(Harness::Criterion).unwrap();
    let options = AggregateOptions::default().with_stddev(true);
    let outcome = fit_samples(&samples, &registry, options, true).unwrap();

    let msm = outcome.document.get("msm_G1").unwrap();
    assert_eq!(msm.model.kind(), "piecewise");
    // Per-iteration 1.4 ms and 1.6 ms around 1.5 ms; a single 2.5 ms iteration
    assert_eq!(msm.stddev, Some(vec![100_000.0, 0.0]));

    let add = outcome.document.get("add_ff").unwrap();
    assert_eq!(add.evaluator, "(n) => 4.0 * n");
}

#[test]
fn test_go_output_end_to_end() {
    let input = "goos: linux\n\
                 BenchmarkMultiExpG1/16_points-8   \t  2000\t    512000 ns/op\n\
                 BenchmarkMultiExpG1/32_points-8   \t  1000\t    768000 ns/op\n\
                 BenchmarkPairing-8                \t  1500\t    1.2 ms/op\n\
                 PASS\n";

    let samples = read_samples(input.as_bytes(), Harness::Golang).unwrap();
    let registry = registry_for(Harness::Golang).unwrap();
    let outcome = fit_samples(&samples, &registry, AggregateOptions::default(), false).unwrap();

    assert_eq!(outcome.document.len(), 2);
    assert_eq!(outcome.document.predict("msm_G1", 24), Some(640_000.0));
    assert_eq!(outcome.document.predict("pairing", 2), Some(2_400_000.0));
}

#[test]
fn test_execute_fit_writes_document() {
    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, r#"{{"name": "bn254/msm_G1/8", "time_value": 800.0, "time_unit": "µs", "repetitions": 8}}"#).unwrap();
    writeln!(input, r#"{{"name": "bn254/msm_G1/16", "time_value": 1.5, "time_unit": "ms"}}"#).unwrap();
    writeln!(input, r#"{{"name": "ElementAdd-8", "time_value": 5.0, "time_unit": "ns"}}"#).unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("out/models.json");

    let args = FitArgs {
        input: Some(input.path().to_path_buf()),
        harness: Harness::Raw,
        curve: None,
        output: Some(output.clone()),
        with_stddev: false,
        include_samples: true,
        print_summary: false,
    };

    let outcome = execute_fit(args).unwrap();
    let loaded = read_document(&output).unwrap();

    assert_eq!(loaded, outcome.document);
    assert_eq!(loaded.predict("msm_G1", 8), Some(100_000.0));
    assert_eq!(loaded.predict("add_ff", 3), Some(15.0));
}
