// エンドツーエンド統合テスト
use crate::fixtures::{fast_config, single_case_registry, CollectingReporter};
use linalg_bench::{
    backends::{self, NalgebraBackend, NdarrayBackend},
    cases::{CaseRegistry, Kernel},
    core::{Backend, Verification},
    engine::Randomizer,
    report::{JsonReport, TableReporter},
    BenchSuite,
};

#[test]
fn test_vector_add_with_two_implementations() {
    let registry = single_case_registry("vector add", Kernel::VectorAdd, &[&[100_000]]);
    let implementations: Vec<Box<dyn Backend>> =
        vec![Box::new(NalgebraBackend::new()), Box::new(NdarrayBackend::new())];

    let mut suite = BenchSuite::new(registry, implementations, fast_config(), CollectingReporter::new());
    let mut rng = Randomizer::with_seed(2024);
    let rows = suite.run(&mut rng).unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.timings.len(), 2);
    assert!(row.timings.iter().all(|t| t.micros > 0));
    assert!(row.label().contains("100000"));

    let reporter = suite.into_reporter();
    assert_eq!(reporter.implementations, vec!["nalgebra", "ndarray"]);
    assert_eq!(reporter.rows, rows);
    assert!(reporter.finished);
}

#[test]
fn test_every_standard_kernel_runs_and_agrees_at_small_shapes() {
    let mut rng = Randomizer::with_seed(77);
    let config = fast_config().with_verify(true).with_measured_iterations(1);

    // 標準ケースの種類をそのまま、小さな形状で実行
    let mut registry = CaseRegistry::new();
    for case in CaseRegistry::standard().unwrap().cases() {
        let kernel = case.kernel();
        let dims: &[usize] = match kernel.rank() {
            1 => &[64],
            2 if kernel.requires_square() => &[12, 12],
            2 => &[10, 14],
            _ => &[9, 7, 5],
        };
        let small = single_case_registry(case.name(), kernel, &[dims]);
        for definition in small.cases() {
            registry.register(definition.clone());
        }
    }

    let mut suite = BenchSuite::new(registry, backends::all(), config, CollectingReporter::new());
    let rows = suite.run(&mut rng).unwrap();

    assert_eq!(rows.len(), Kernel::ALL.len());
    for row in &rows {
        assert_eq!(row.timings.len(), 3, "{}", row.label());
        assert_eq!(row.verification, Some(Verification::Agreed), "{}", row.label());
    }
}

#[test]
fn test_table_output_for_three_implementations() {
    let registry = single_case_registry("r = a + b", Kernel::VectorAdd, &[&[1_000], &[2_000]]);
    let reporter = TableReporter::new(Vec::new(), false);

    let mut suite = BenchSuite::new(registry, backends::all(), fast_config(), reporter);
    let mut rng = Randomizer::with_seed(5);
    suite.run(&mut rng).unwrap();

    let output = String::from_utf8(suite.into_reporter().into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    // 罫線・ヘッダー・罫線・2 行・罫線
    assert_eq!(lines.len(), 6);
    assert!(lines[1].contains("nalgebra"));
    assert!(lines[1].contains("ndarray"));
    assert!(lines[1].contains("dense"));
    assert!(lines[3].contains("1000"));
    assert!(lines[4].contains("2000"));
    assert!(lines[5].chars().all(|c| c == '-'));
}

#[test]
fn test_json_report_export() {
    let registry = single_case_registry("R = A * B", Kernel::MatrixMul, &[&[16, 8, 12]]);
    let config = fast_config();
    let mut suite = BenchSuite::new(registry, backends::all(), config.clone(), CollectingReporter::new());
    let mut rng = Randomizer::with_seed(11);
    let rows = suite.run(&mut rng).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    JsonReport::new("integration", &config, rng.seed(), suite.implementation_names(), rows)
        .write_to(&path)
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["suite"], "integration");
    assert_eq!(value["seed"], 11);
    assert_eq!(value["measured_iterations"], 5);
    assert_eq!(value["rows"][0]["case"], "R = A * B");
    assert_eq!(value["rows"][0]["timings"].as_array().unwrap().len(), 3);
}
