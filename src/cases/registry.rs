// ケース定義とレジストリ
// 演算式 × 形状の組をデータとして保持し、汎用ランナーで順に実行する

use super::kernel::Kernel;
use crate::core::{BenchResult, Shape};

/// 名前付きの演算と、計測する形状の一覧
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDefinition {
    name: String,
    kernel: Kernel,
    shapes: Vec<Shape>,
}

impl CaseDefinition {
    /// 全ての形状を検証してケースを作成
    pub fn new(name: impl Into<String>, kernel: Kernel, shapes: Vec<Shape>) -> BenchResult<Self> {
        for shape in &shapes {
            kernel.validate(shape)?;
        }
        Ok(Self {
            name: name.into(),
            kernel,
            shapes,
        })
    }

    /// 演算式をそのまま名前にしたケースを作成
    pub fn for_kernel(kernel: Kernel, shapes: Vec<Shape>) -> BenchResult<Self> {
        Self::new(kernel.expression(), kernel, shapes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    fn matches(&self, pattern: &str) -> bool {
        let pattern = pattern.to_lowercase();
        self.name.to_lowercase().contains(&pattern) || self.kernel.id().contains(&pattern)
    }
}

/// ケース定義の一覧
#[derive(Debug, Clone, Default)]
pub struct CaseRegistry {
    cases: Vec<CaseDefinition>,
}

impl CaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, case: CaseDefinition) {
        self.cases.push(case);
    }

    /// 登録済みのケースを登録順に返す
    pub fn cases(&self) -> &[CaseDefinition] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// 名前または識別子に部分一致するケースだけを残す（大文字小文字を区別しない）
    pub fn filter(&self, pattern: &str) -> Self {
        Self {
            cases: self
                .cases
                .iter()
                .filter(|case| case.matches(pattern))
                .cloned()
                .collect(),
        }
    }

    /// 各ケースの形状数を先頭から `limit` 個までに制限
    pub fn limit_shapes(&self, limit: usize) -> Self {
        Self {
            cases: self
                .cases
                .iter()
                .map(|case| CaseDefinition {
                    shapes: case.shapes.iter().take(limit).cloned().collect(),
                    ..case.clone()
                })
                .collect(),
        }
    }

    /// 計測される (ケース, 形状) の総数
    pub fn row_count(&self) -> usize {
        self.cases.iter().map(|case| case.shapes.len()).sum()
    }

    /// 標準のケース一覧
    pub fn standard() -> BenchResult<Self> {
        let mut registry = Self::new();

        let vector_sizes = vectors(&[
            100, 1_000, 10_000, 100_000, 500_000, 1_000_000, 2_000_000, 3_000_000, 4_000_000,
        ]);
        let large_vectors = vectors(&stepped(500_000, 500_000, 8));
        let scale_vectors = vectors(&stepped(500_000, 500_000, 10));
        let exp_vectors = vectors(&[
            10_000, 100_000, 500_000, 1_000_000, 1_500_000, 2_000_000, 2_500_000, 3_000_000,
            3_500_000, 4_000_000,
        ]);
        let square_hundreds = squares(&stepped(100, 100, 10));
        let transpose_shapes = matrices(&[
            (64, 64),
            (64, 128),
            (128, 128),
            (256, 128),
            (256, 256),
            (256, 384),
            (300, 500),
            (512, 512),
            (512, 1024),
            (1024, 1024),
            (2048, 1024),
            (2048, 2048),
        ]);
        let gemv_shapes = squares(&[16, 32, 64, 128, 256, 512, 1024, 2048]);
        let gemm_shapes: Vec<Shape> = [
            (128, 32, 64),
            (128, 128, 128),
            (256, 128, 256),
            (256, 256, 256),
            (300, 200, 400),
            (512, 512, 512),
            (768, 768, 768),
        ]
        .iter()
        .map(|&(m, k, n)| Shape::new(vec![m, k, n]))
        .collect();

        let table = [
            (Kernel::VectorIdentity, scale_vectors.clone()),
            (Kernel::VectorScale, scale_vectors),
            (Kernel::VectorAddComplex, large_vectors.clone()),
            (Kernel::VectorMix, large_vectors.clone()),
            (Kernel::MatrixMix, square_hundreds.clone()),
            (Kernel::VectorAdd, vector_sizes),
            (Kernel::VectorAdd3, large_vectors.clone()),
            (Kernel::VectorAdd4, large_vectors.clone()),
            (Kernel::VectorExp, exp_vectors),
            (Kernel::Transpose, transpose_shapes.clone()),
            (Kernel::TransposeInPlace, transpose_shapes),
            (Kernel::VectorMatrixMul, gemv_shapes.clone()),
            (Kernel::MatrixVectorMul, gemv_shapes),
            (Kernel::MatrixMul, gemm_shapes.clone()),
            (Kernel::MatrixMulTransposed, gemm_shapes),
            (Kernel::MatrixMulSum, square_hundreds.clone()),
            (Kernel::MatrixMulChain, square_hundreds.clone()),
            (Kernel::MatrixSumDiffMul, square_hundreds),
            (Kernel::VectorDot, large_vectors),
        ];

        for (kernel, shapes) in table {
            registry.register(CaseDefinition::for_kernel(kernel, shapes)?);
        }

        Ok(registry)
    }
}

fn stepped(start: usize, step: usize, count: usize) -> Vec<usize> {
    (0..count).map(|i| start + i * step).collect()
}

fn vectors(sizes: &[usize]) -> Vec<Shape> {
    sizes.iter().map(|&n| Shape::new(vec![n])).collect()
}

fn squares(sizes: &[usize]) -> Vec<Shape> {
    sizes.iter().map(|&n| Shape::new(vec![n, n])).collect()
}

fn matrices(sizes: &[(usize, usize)]) -> Vec<Shape> {
    sizes
        .iter()
        .map(|&(rows, cols)| Shape::new(vec![rows, cols]))
        .collect()
}
