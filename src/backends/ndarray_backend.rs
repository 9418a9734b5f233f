//! ndarray による実装

use crate::cases::Kernel;
use crate::core::{Backend, BenchResult, OperandKind, Shape, Workload};
use crate::engine::operand::{bind, Operand};
use crate::engine::random::Randomizer;
use ndarray::{Array1, Array2};

impl Operand for Array1<f64> {
    fn kind(&self) -> OperandKind {
        OperandKind::Vector { len: self.len() }
    }

    fn randomize(&mut self, rng: &mut Randomizer) {
        rng.fill_elements(self.iter_mut());
    }

    fn to_row_major(&self) -> Vec<f64> {
        self.to_vec()
    }
}

impl Operand for Array2<f64> {
    fn kind(&self) -> OperandKind {
        let (rows, cols) = self.dim();
        OperandKind::Matrix { rows, cols }
    }

    fn randomize(&mut self, rng: &mut Randomizer) {
        let (rows, cols) = self.dim();
        rng.fill_indexed(rows, cols, |i, j, value| self[[i, j]] = value);
    }

    fn to_row_major(&self) -> Vec<f64> {
        // 論理順の走査は行優先
        self.iter().copied().collect()
    }
}

/// ndarray バックエンド
#[derive(Debug, Default, Clone, Copy)]
pub struct NdarrayBackend;

impl NdarrayBackend {
    pub const NAME: &'static str = "ndarray";

    pub fn new() -> Self {
        Self
    }
}

fn vector(n: usize) -> Array1<f64> {
    Array1::zeros(n)
}

fn matrix(rows: usize, cols: usize) -> Array2<f64> {
    Array2::zeros((rows, cols))
}

impl Backend for NdarrayBackend {
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
                *r = &*a + &(&*a * 5.9) + &*a + &*b - &(&*b / 2.3) - &*a + &(&*b * 1.1);
            }),
            Kernel::VectorIdentity => bind((vector(d[0]), vector(d[0])), |(r, a)| {
                *r = (&*a + &(&*a * 0.0)) * 1.0;
            }),
            Kernel::VectorScale => bind((vector(d[0]),), |(r,)| {
                *r *= 3.3;
            }),
            Kernel::VectorExp => bind((vector(d[0]), vector(d[0])), |(r, a)| {
                *r = a.mapv(f64::exp);
            }),
            Kernel::VectorDot => bind((vector(d[0]), vector(d[0]), vector(d[0])), |(c, a, b)| {
                let dot = a.dot(&*b);
                *c *= dot;
            }),
            Kernel::MatrixMix => bind(
                (matrix(d[0], d[1]), matrix(d[0], d[1]), matrix(d[0], d[1])),
                |(r, a, b)| {
                    *r = &*a + &(&*a * 5.9) + &*a + &*b - &(&*b / 2.3) - &*a + &(&*b * 1.1);
                },
            ),
            Kernel::Transpose => bind((matrix(d[1], d[0]), matrix(d[0], d[1])), |(r, a)| {
                r.assign(&a.t());
            }),
            Kernel::TransposeInPlace => bind((matrix(d[0], d[1]),), |(r,)| {
                let n = r.nrows();
                if n == r.ncols() {
                    for i in 0..n {
                        for j in (i + 1)..n {
                            r.swap((i, j), (j, i));
                        }
                    }
                } else {
                    let transposed = r.t().as_standard_layout().into_owned();
                    *r = transposed;
                }
            }),
            Kernel::VectorMatrixMul => bind(
                (vector(d[1]), vector(d[0]), matrix(d[0], d[1])),
                |(r, a, b)| {
                    *r = a.dot(&*b);
                },
            ),
            Kernel::MatrixVectorMul => bind(
                (vector(d[0]), matrix(d[0], d[1]), vector(d[1])),
                |(r, a, b)| {
                    *r = a.dot(&*b);
                },
            ),
            Kernel::MatrixMul => bind(
                (matrix(d[0], d[2]), matrix(d[0], d[1]), matrix(d[1], d[2])),
                |(r, a, b)| {
                    *r = a.dot(&*b);
                },
            ),
            Kernel::MatrixMulTransposed => bind(
                (matrix(d[0], d[2]), matrix(d[0], d[1]), matrix(d[2], d[1])),
                |(r, a, b)| {
                    *r = a.dot(&b.t());
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
                    *r = a.dot(&(&*b + &*c));
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
                    *r = a.dot(&b.dot(&*c));
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
                    *r = (&*a + &*b).dot(&(&*c - &*e));
                },
            ),
        };

        Ok(workload)
    }
}
