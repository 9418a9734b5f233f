//! nalgebra による実装
//!
//! `DVector<f64>` / `DMatrix<f64>` の演算子オーバーロードをそのまま使う。

use crate::cases::Kernel;
use crate::core::{Backend, BenchResult, OperandKind, Shape, Workload};
use crate::engine::operand::{bind, Operand};
use crate::engine::random::Randomizer;
use nalgebra::{DMatrix, DVector};

impl Operand for DVector<f64> {
    fn kind(&self) -> OperandKind {
        OperandKind::Vector { len: self.len() }
    }

    fn randomize(&mut self, rng: &mut Randomizer) {
        rng.fill_elements(self.iter_mut());
    }

    fn to_row_major(&self) -> Vec<f64> {
        self.iter().copied().collect()
    }
}

impl Operand for DMatrix<f64> {
    fn kind(&self) -> OperandKind {
        OperandKind::Matrix {
            rows: self.nrows(),
            cols: self.ncols(),
        }
    }

    fn randomize(&mut self, rng: &mut Randomizer) {
        let (rows, cols) = self.shape();
        rng.fill_indexed(rows, cols, |i, j, value| self[(i, j)] = value);
    }

    fn to_row_major(&self) -> Vec<f64> {
        // 列優先の格納順を行優先に並べ替える
        self.transpose().iter().copied().collect()
    }
}

/// nalgebra バックエンド
#[derive(Debug, Default, Clone, Copy)]
pub struct NalgebraBackend;

impl NalgebraBackend {
    pub const NAME: &'static str = "nalgebra";

    pub fn new() -> Self {
        Self
    }
}

fn vector(n: usize) -> DVector<f64> {
    DVector::zeros(n)
}

fn matrix(rows: usize, cols: usize) -> DMatrix<f64> {
    DMatrix::zeros(rows, cols)
}

impl Backend for NalgebraBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn prepare(&self, kernel: Kernel, shape: &Shape) -> BenchResult<Box<dyn Workload>> {
        kernel.validate(shape)?;
        let d = shape.dims();

        let workload = match kernel {
            Kernel::VectorAdd => bind((vector(d[0]), vector(d[0]), vector(d[0])), |(r, a, b)| {
                *r = &*a + &*b;
            }),
            Kernel::VectorAdd3 => bind(
                (vector(d[0]), vector(d[0]), vector(d[0]), vector(d[0])),
                |(r, a, b, c)| {
                    *r = &*a + &*b + &*c;
                },
            ),
            Kernel::VectorAdd4 => bind(
                (vector(d[0]), vector(d[0]), vector(d[0]), vector(d[0]), vector(d[0])),
                |(r, a, b, c, e)| {
                    *r = &*a + &*b + &*c + &*e;
                },
            ),
            Kernel::VectorAddComplex => {
                bind((vector(d[0]), vector(d[0]), vector(d[0])), |(r, a, b)| {
                    *r = &*a + &*b + &*a + &*b + &*a + &*a + &*b + &*a + &*a;
                })
            }
            Kernel::VectorMix => bind((vector(d[0]), vector(d[0]), vector(d[0])), |(r, a, b)| {
                *r = &*a + &*a * 5.9 + &*a + &*b - &*b / 2.3 - &*a + &*b * 1.1;
            }),
            Kernel::VectorIdentity => bind((vector(d[0]), vector(d[0])), |(r, a)| {
                *r = (&*a + &*a * 0.0) * 1.0;
            }),
            Kernel::VectorScale => bind((vector(d[0]),), |(r,)| {
                *r *= 3.3;
            }),
            Kernel::VectorExp => bind((vector(d[0]), vector(d[0])), |(r, a)| {
                *r = a.map(f64::exp);
            }),
            Kernel::VectorDot => bind((vector(d[0]), vector(d[0]), vector(d[0])), |(c, a, b)| {
                *c *= a.dot(&*b);
            }),
            Kernel::MatrixMix => bind(
                (matrix(d[0], d[1]), matrix(d[0], d[1]), matrix(d[0], d[1])),
                |(r, a, b)| {
                    *r = &*a + &*a * 5.9 + &*a + &*b - &*b / 2.3 - &*a + &*b * 1.1;
                },
            ),
            Kernel::Transpose => bind((matrix(d[1], d[0]), matrix(d[0], d[1])), |(r, a)| {
                *r = a.transpose();
            }),
            Kernel::TransposeInPlace => bind((matrix(d[0], d[1]),), |(r,)| {
                if r.is_square() {
                    r.transpose_mut();
                } else {
                    // 長方形は格納形状が変わるため新しい行列になる
                    let transposed = r.transpose();
                    *r = transposed;
                }
            }),
            Kernel::VectorMatrixMul => bind(
                (vector(d[1]), vector(d[0]), matrix(d[0], d[1])),
                |(r, a, b)| {
                    *r = b.tr_mul(&*a);
                },
            ),
            Kernel::MatrixVectorMul => bind(
                (vector(d[0]), matrix(d[0], d[1]), vector(d[1])),
                |(r, a, b)| {
                    *r = &*a * &*b;
                },
            ),
            Kernel::MatrixMul => bind(
                (matrix(d[0], d[2]), matrix(d[0], d[1]), matrix(d[1], d[2])),
                |(r, a, b)| {
                    *r = &*a * &*b;
                },
            ),
            Kernel::MatrixMulTransposed => bind(
                (matrix(d[0], d[2]), matrix(d[0], d[1]), matrix(d[2], d[1])),
                |(r, a, b)| {
                    *r = &*a * b.transpose();
                },
            ),
            Kernel::MatrixMulSum => bind(
                (
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                ),
                |(r, a, b, c)| {
                    *r = &*a * (&*b + &*c);
                },
            ),
            Kernel::MatrixMulChain => bind(
                (
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                ),
                |(r, a, b, c)| {
                    *r = &*a * (&*b * &*c);
                },
            ),
            Kernel::MatrixSumDiffMul => bind(
                (
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                    matrix(d[0], d[1]),
                ),
                |(r, a, b, c, e)| {
                    *r = (&*a + &*b) * (&*c - &*e);
                },
            ),
        };

        Ok(workload)
    }
}
