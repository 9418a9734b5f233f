//! 素朴な行優先バッファによる実装
//!
//! 要素ごとの演算は一つのループに融合し、行列積は `matrixmultiply::dgemm` に任せる。

use crate::cases::Kernel;
use crate::core::{Backend, BenchResult, OperandKind, Shape, Workload};
use crate::engine::operand::{bind, Operand};
use crate::engine::random::Randomizer;

/// 連続領域のベクトル
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector {
    data: Vec<f64>,
}

impl DenseVector {
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    #[cfg(test)]
    fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 行優先で格納した行列
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    #[cfg(test)]
    fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    #[cfg(test)]
    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// 追加の領域を確保せずに転置する
    ///
    /// 正方なら対角を挟んで交換し、それ以外は置換の巡回を一つずつたどる
    pub fn transpose_in_place(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        if rows == cols {
            for i in 0..rows {
                for j in (i + 1)..cols {
                    self.data.swap(i * cols + j, j * cols + i);
                }
            }
            return;
        }

        let len = self.data.len();
        if len > 1 {
            // 位置 s の要素は転置後に (s * rows) mod (len - 1) へ移る。先頭と末尾は動かない
            let last = len - 1;
            let next = |pos: usize| pos * rows % last;
            for start in 1..last {
                // 巡回の最小位置からだけ回す
                let mut pos = next(start);
                while pos > start {
                    pos = next(pos);
                }
                if pos != start {
                    continue;
                }

                let mut carried = self.data[start];
                let mut pos = start;
                loop {
                    pos = next(pos);
                    std::mem::swap(&mut self.data[pos], &mut carried);
                    if pos == start {
                        break;
                    }
                }
            }
        }

        self.rows = cols;
        self.cols = rows;
    }
}

impl Operand for DenseVector {
    fn kind(&self) -> OperandKind {
        OperandKind::Vector { len: self.len() }
    }

    fn randomize(&mut self, rng: &mut Randomizer) {
        rng.fill_elements(self.data.iter_mut());
    }

    fn to_row_major(&self) -> Vec<f64> {
        self.data.clone()
    }
}

impl Operand for DenseMatrix {
    fn kind(&self) -> OperandKind {
        OperandKind::Matrix {
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn randomize(&mut self, rng: &mut Randomizer) {
        let (rows, cols) = (self.rows, self.cols);
        rng.fill_indexed(rows, cols, |i, j, value| self.set(i, j, value));
    }

    fn to_row_major(&self) -> Vec<f64> {
        self.data.clone()
    }
}

/// 行列積の一方のオペランド（要素列と行・列ストライド）
struct Strided<'a> {
    data: &'a [f64],
    row_stride: isize,
    col_stride: isize,
}

impl<'a> Strided<'a> {
    fn row_major(data: &'a [f64], cols: usize) -> Self {
        Self {
            data,
            row_stride: cols as isize,
            col_stride: 1,
        }
    }

    /// 行優先 `rows x cols` の行列を転置として読む
    fn transposed(data: &'a [f64], cols: usize) -> Self {
        Self {
            data,
            row_stride: 1,
            col_stride: cols as isize,
        }
    }
}

/// `out (m x n) = a (m x k) * b (k x n)`、結果は行優先で上書き
fn gemm(m: usize, k: usize, n: usize, a: Strided<'_>, b: Strided<'_>, out: &mut [f64]) {
    assert!(a.data.len() >= m * k && b.data.len() >= k * n && out.len() >= m * n);
    if m == 0 || n == 0 {
        return;
    }
    // SAFETY: 上の assert で各バッファがストライドの示す範囲を覆うことを確認済み。
    // out は a, b と別の可変借用なので重ならない
    unsafe {
        matrixmultiply::dgemm(
            m,
            k,
            n,
            1.0,
            a.data.as_ptr(),
            a.row_stride,
            a.col_stride,
            b.data.as_ptr(),
            b.row_stride,
            b.col_stride,
            0.0,
            out.as_mut_ptr(),
            n as isize,
            1,
        );
    }
}

fn elementwise2(r: &mut [f64], a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) {
    for ((r, &a), &b) in r.iter_mut().zip(a).zip(b) {
        *r = f(a, b);
    }
}

fn add_into(out: &mut [f64], a: &[f64], b: &[f64]) {
    elementwise2(out, a, b, |a, b| a + b);
}

fn mix(a: f64, b: f64) -> f64 {
    a + a * 5.9 + a + b - b / 2.3 - a + b * 1.1
}

/// 行優先バッファ + matrixmultiply バックエンド
#[derive(Debug, Default, Clone, Copy)]
pub struct DenseBackend;

impl DenseBackend {
    pub const NAME: &'static str = "dense";

    pub fn new() -> Self {
        Self
    }
}

fn vector(n: usize) -> DenseVector {
    DenseVector::zeros(n)
}

fn matrix(rows: usize, cols: usize) -> DenseMatrix {
    DenseMatrix::zeros(rows, cols)
}

impl Backend for DenseBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn prepare(&self, kernel: Kernel, shape: &Shape) -> BenchResult<Box<dyn Workload>> {
        kernel.validate(shape)?;
        let d = shape.dims();

        let workload = match kernel {
            Kernel::VectorAdd => bind((vector(d[0]), vector(d[0]), vector(d[0])), |(r, a, b)| {
                add_into(&mut r.data, &a.data, &b.data);
            }),
            Kernel::VectorAdd3 => bind(
                (vector(d[0]), vector(d[0]), vector(d[0]), vector(d[0])),
                |(r, a, b, c)| {
                    for (i, r) in r.data.iter_mut().enumerate() {
                        *r = a.data[i] + b.data[i] + c.data[i];
                    }
                },
            ),
            Kernel::VectorAdd4 => bind(
                (vector(d[0]), vector(d[0]), vector(d[0]), vector(d[0]), vector(d[0])),
                |(r, a, b, c, e)| {
                    for (i, r) in r.data.iter_mut().enumerate() {
                        *r = a.data[i] + b.data[i] + c.data[i] + e.data[i];
                    }
                },
            ),
            Kernel::VectorAddComplex => {
                bind((vector(d[0]), vector(d[0]), vector(d[0])), |(r, a, b)| {
                    elementwise2(&mut r.data, &a.data, &b.data, |a, b| {
                        a + b + a + b + a + a + b + a + a
                    });
                })
            }
            Kernel::VectorMix => bind((vector(d[0]), vector(d[0]), vector(d[0])), |(r, a, b)| {
                elementwise2(&mut r.data, &a.data, &b.data, mix);
            }),
            Kernel::VectorIdentity => bind((vector(d[0]), vector(d[0])), |(r, a)| {
                for (r, &a) in r.data.iter_mut().zip(&a.data) {
                    *r = (a + a * 0.0) * 1.0;
                }
            }),
            Kernel::VectorScale => bind((vector(d[0]),), |(r,)| {
                for r in r.data.iter_mut() {
                    *r *= 3.3;
                }
            }),
            Kernel::VectorExp => bind((vector(d[0]), vector(d[0])), |(r, a)| {
                for (r, &a) in r.data.iter_mut().zip(&a.data) {
                    *r = a.exp();
                }
            }),
            Kernel::VectorDot => bind((vector(d[0]), vector(d[0]), vector(d[0])), |(c, a, b)| {
                let dot: f64 = a.data.iter().zip(&b.data).map(|(a, b)| a * b).sum();
                for c in c.data.iter_mut() {
                    *c *= dot;
                }
            }),
            Kernel::MatrixMix => bind(
                (matrix(d[0], d[1]), matrix(d[0], d[1]), matrix(d[0], d[1])),
                |(r, a, b)| {
                    elementwise2(&mut r.data, &a.data, &b.data, mix);
                },
            ),
            Kernel::Transpose => bind((matrix(d[1], d[0]), matrix(d[0], d[1])), |(r, a)| {
                for i in 0..a.rows {
                    for j in 0..a.cols {
                        r.data[j * a.rows + i] = a.data[i * a.cols + j];
                    }
                }
            }),
            Kernel::TransposeInPlace => bind((matrix(d[0], d[1]),), |(r,)| {
                r.transpose_in_place();
            }),
            Kernel::VectorMatrixMul => bind(
                (vector(d[1]), vector(d[0]), matrix(d[0], d[1])),
                |(r, a, b)| {
                    let (k, n) = (b.rows, b.cols);
                    gemm(
                        1,
                        k,
                        n,
                        Strided::row_major(&a.data, k),
                        Strided::row_major(&b.data, n),
                        &mut r.data,
                    );
                },
            ),
            Kernel::MatrixVectorMul => bind(
                (vector(d[0]), matrix(d[0], d[1]), vector(d[1])),
                |(r, a, b)| {
                    let (m, k) = (a.rows, a.cols);
                    gemm(
                        m,
                        k,
                        1,
                        Strided::row_major(&a.data, k),
                        Strided::row_major(&b.data, 1),
                        &mut r.data,
                    );
                },
            ),
            Kernel::MatrixMul => bind(
                (matrix(d[0], d[2]), matrix(d[0], d[1]), matrix(d[1], d[2])),
                |(r, a, b)| {
                    gemm(
                        a.rows,
                        a.cols,
                        b.cols,
                        Strided::row_major(&a.data, a.cols),
                        Strided::row_major(&b.data, b.cols),
                        &mut r.data,
                    );
                },
            ),
            Kernel::MatrixMulTransposed => bind(
                (matrix(d[0], d[2]), matrix(d[0], d[1]), matrix(d[2], d[1])),
                |(r, a, b)| {
                    gemm(
                        a.rows,
                        a.cols,
                        b.rows,
                        Strided::row_major(&a.data, a.cols),
                        Strided::transposed(&b.data, b.cols),
                        &mut r.data,
                    );
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
                    let mut sum = vec![0.0; b.data.len()];
                    add_into(&mut sum, &b.data, &c.data);
                    gemm(
                        a.rows,
                        a.cols,
                        b.cols,
                        Strided::row_major(&a.data, a.cols),
                        Strided::row_major(&sum, b.cols),
                        &mut r.data,
                    );
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
                    let mut product = vec![0.0; b.rows * c.cols];
                    gemm(
                        b.rows,
                        b.cols,
                        c.cols,
                        Strided::row_major(&b.data, b.cols),
                        Strided::row_major(&c.data, c.cols),
                        &mut product,
                    );
                    gemm(
                        a.rows,
                        a.cols,
                        c.cols,
                        Strided::row_major(&a.data, a.cols),
                        Strided::row_major(&product, c.cols),
                        &mut r.data,
                    );
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
                    let mut sum = vec![0.0; a.data.len()];
                    let mut diff = vec![0.0; c.data.len()];
                    add_into(&mut sum, &a.data, &b.data);
                    elementwise2(&mut diff, &c.data, &e.data, |c, e| c - e);
                    gemm(
                        a.rows,
                        a.cols,
                        c.cols,
                        Strided::row_major(&sum, a.cols),
                        Strided::row_major(&diff, c.cols),
                        &mut r.data,
                    );
                },
            ),
        };

        Ok(workload)
    }
}
