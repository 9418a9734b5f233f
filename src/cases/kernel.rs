// 計測する演算式の一覧
// 各バックエンドはこの列挙型に従ってオペランドと演算を組み立てる

use crate::core::{BenchError, BenchResult, Shape};
use serde::{Deserialize, Serialize};

/// 計測対象の演算式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kernel {
    VectorAdd,
    VectorAdd3,
    VectorAdd4,
    VectorAddComplex,
    VectorMix,
    VectorIdentity,
    VectorScale,
    VectorExp,
    VectorDot,
    MatrixMix,
    Transpose,
    TransposeInPlace,
    VectorMatrixMul,
    MatrixVectorMul,
    MatrixMul,
    MatrixMulTransposed,
    MatrixMulSum,
    MatrixMulChain,
    MatrixSumDiffMul,
}

impl Kernel {
    pub const ALL: [Kernel; 19] = [
        Kernel::VectorAdd,
        Kernel::VectorAdd3,
        Kernel::VectorAdd4,
        Kernel::VectorAddComplex,
        Kernel::VectorMix,
        Kernel::VectorIdentity,
        Kernel::VectorScale,
        Kernel::VectorExp,
        Kernel::VectorDot,
        Kernel::MatrixMix,
        Kernel::Transpose,
        Kernel::TransposeInPlace,
        Kernel::VectorMatrixMul,
        Kernel::MatrixVectorMul,
        Kernel::MatrixMul,
        Kernel::MatrixMulTransposed,
        Kernel::MatrixMulSum,
        Kernel::MatrixMulChain,
        Kernel::MatrixSumDiffMul,
    ];

    /// 表に表示する演算式
    pub const fn expression(&self) -> &'static str {
        match self {
            Self::VectorAdd => "r = a + b",
            Self::VectorAdd3 => "r = a + b + c",
            Self::VectorAdd4 => "r = a + b + c + d",
            Self::VectorAddComplex => "add_complex",
            Self::VectorMix => "mix",
            Self::VectorIdentity => "r = (a + 0.0 * a) * 1.0",
            Self::VectorScale => "r *= 3.3",
            Self::VectorExp => "r = exp(a)",
            Self::VectorDot => "dot",
            Self::MatrixMix => "mix_matrix",
            Self::Transpose => "R = A'",
            Self::TransposeInPlace => "R = R'",
            Self::VectorMatrixMul => "r = a * B",
            Self::MatrixVectorMul => "r = A * b",
            Self::MatrixMul => "R = A * B",
            Self::MatrixMulTransposed => "R = A * B'",
            Self::MatrixMulSum => "R = A * (B + C)",
            Self::MatrixMulChain => "R = A * (B * C)",
            Self::MatrixSumDiffMul => "R = (A + B) * (C - D)",
        }
    }

    /// 設定ファイル・フィルタ用の識別子
    pub const fn id(&self) -> &'static str {
        match self {
            Self::VectorAdd => "vector_add",
            Self::VectorAdd3 => "vector_add3",
            Self::VectorAdd4 => "vector_add4",
            Self::VectorAddComplex => "vector_add_complex",
            Self::VectorMix => "vector_mix",
            Self::VectorIdentity => "vector_identity",
            Self::VectorScale => "vector_scale",
            Self::VectorExp => "vector_exp",
            Self::VectorDot => "vector_dot",
            Self::MatrixMix => "matrix_mix",
            Self::Transpose => "transpose",
            Self::TransposeInPlace => "transpose_in_place",
            Self::VectorMatrixMul => "vector_matrix_mul",
            Self::MatrixVectorMul => "matrix_vector_mul",
            Self::MatrixMul => "matrix_mul",
            Self::MatrixMulTransposed => "matrix_mul_transposed",
            Self::MatrixMulSum => "matrix_mul_sum",
            Self::MatrixMulChain => "matrix_mul_chain",
            Self::MatrixSumDiffMul => "matrix_sum_diff_mul",
        }
    }

    /// 形状パラメータの次元数
    pub const fn rank(&self) -> usize {
        match self {
            Self::VectorAdd
            | Self::VectorAdd3
            | Self::VectorAdd4
            | Self::VectorAddComplex
            | Self::VectorMix
            | Self::VectorIdentity
            | Self::VectorScale
            | Self::VectorExp
            | Self::VectorDot => 1,
            Self::MatrixMul | Self::MatrixMulTransposed => 3,
            _ => 2,
        }
    }

    /// 正方行列を要求する演算かどうか
    pub const fn requires_square(&self) -> bool {
        matches!(
            self,
            Self::MatrixMulSum | Self::MatrixMulChain | Self::MatrixSumDiffMul
        )
    }

    /// 形状がこの演算に適合するか検証
    pub fn validate(&self, shape: &Shape) -> BenchResult<()> {
        if shape.rank() != self.rank() {
            return Err(BenchError::shape_arity(
                self.expression(),
                self.rank(),
                shape.rank(),
            ));
        }

        if self.requires_square() {
            let dims = shape.dims();
            if dims[0] != dims[1] {
                return Err(BenchError::shape_mismatch(
                    self.expression(),
                    format!("正方行列が必要です ({shape})"),
                ));
            }
        }

        Ok(())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}
