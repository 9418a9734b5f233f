// 計測プリミティブの統合テスト
use linalg_bench::{
    backends::{self, DenseBackend},
    cases::Kernel,
    core::{Backend, OperandKind, Shape},
    core::Workload,
    engine::{measure, MeasurePlan, Operand, Randomizer},
};
use nalgebra::DVector;

#[test]
fn test_larger_vector_add_is_not_faster() {
    let plan = MeasurePlan::new(5, 20);
    let backend = DenseBackend::new();
    let mut rng = Randomizer::with_seed(3);

    let mut tiny = backend.prepare(Kernel::VectorAdd, &Shape::new(vec![10])).unwrap();
    let mut large = backend
        .prepare(Kernel::VectorAdd, &Shape::new(vec![1_000_000]))
        .unwrap();

    let tiny_micros = measure(tiny.as_mut(), &mut rng, plan);
    let large_micros = measure(large.as_mut(), &mut rng, plan);

    assert!(
        large_micros >= tiny_micros,
        "large {large_micros}us < tiny {tiny_micros}us"
    );
}

#[test]
fn test_rerandomize_changes_vector() {
    let mut rng = Randomizer::with_seed(8);
    let mut vector = DVector::<f64>::zeros(10);

    vector.randomize(&mut rng);
    let first = vector.clone();
    vector.randomize(&mut rng);

    assert_eq!(vector.kind(), OperandKind::Vector { len: 10 });
    assert!(first.iter().zip(vector.iter()).any(|(a, b)| a != b));
}

#[test]
fn test_zero_size_workloads_measure_zero_or_more() {
    let mut rng = Randomizer::with_seed(1);
    for backend in backends::all() {
        let mut workload = backend
            .prepare(Kernel::MatrixMul, &Shape::new(vec![0, 0, 0]))
            .unwrap();
        // 両段階を完走する
        let _ = measure(workload.as_mut(), &mut rng, MeasurePlan::new(3, 3));
        assert!(workload.output().is_empty());
    }
}

#[test]
fn test_same_seed_same_inputs_across_backends() {
    let shape = Shape::new(vec![5, 7]);
    let outputs: Vec<Vec<f64>> = backends::all()
        .iter()
        .map(|backend| {
            let mut workload = backend.prepare(Kernel::Transpose, &shape).unwrap();
            let mut rng = Randomizer::with_seed(123);
            workload.randomize(&mut rng);
            workload.execute();
            workload.output()
        })
        .collect();

    assert_eq!(outputs[0].len(), 35);
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0], outputs[2]);
}
