// ベンチマークに関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// オペランドの形状パラメータ
///
/// 次元の並びをそのまま保持する。ラベルは `100000` や `256x128` の形式
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Self(dims.into())
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn label(&self) -> String {
        self.0
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("x")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}

/// オペランドの種類（ベクトル or 行列）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Vector { len: usize },
    Matrix { rows: usize, cols: usize },
}

impl OperandKind {
    /// 要素数
    pub fn element_count(&self) -> usize {
        match *self {
            Self::Vector { len } => len,
            Self::Matrix { rows, cols } => rows * cols,
        }
    }
}

/// 一つの実装に対する計測結果（マイクロ秒の合計値）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    pub implementation: String,
    pub micros: u64,
}

/// 実装間の出力照合結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verification {
    Agreed,
    Mismatch {
        implementation: String,
        index: usize,
        expected: f64,
        actual: f64,
    },
}

impl Verification {
    pub fn is_agreed(&self) -> bool {
        matches!(self, Self::Agreed)
    }
}

/// 一ケース・一形状分の比較結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub case: String,
    pub shape: Shape,
    pub timings: Vec<Timing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

impl ResultRow {
    pub fn new(case: impl Into<String>, shape: Shape) -> Self {
        Self {
            case: case.into(),
            shape,
            timings: Vec::new(),
            verification: None,
        }
    }

    pub fn push(&mut self, implementation: impl Into<String>, micros: u64) {
        self.timings.push(Timing {
            implementation: implementation.into(),
            micros,
        });
    }

    /// ケース名と形状を合わせたラベル
    pub fn label(&self) -> String {
        format!("{} ({})", self.case, self.shape)
    }

    pub fn get(&self, implementation: &str) -> Option<u64> {
        self.timings
            .iter()
            .find(|t| t.implementation == implementation)
            .map(|t| t.micros)
    }

    pub fn fastest(&self) -> Option<&Timing> {
        self.timings.iter().min_by_key(|t| t.micros)
    }

    pub fn slowest(&self) -> Option<&Timing> {
        self.timings.iter().max_by_key(|t| t.micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_label() {
        assert_eq!(Shape::new(vec![100000]).label(), "100000");
        assert_eq!(Shape::new(vec![256, 128]).label(), "256x128");
        assert_eq!(Shape::new(vec![128, 32, 64]).to_string(), "128x32x64");
        assert_eq!(Shape::new(vec![3, 4]).rank(), 2);
    }

    #[test]
    fn test_operand_kind_element_count() {
        assert_eq!(OperandKind::Vector { len: 7 }.element_count(), 7);
        assert_eq!(OperandKind::Matrix { rows: 3, cols: 4 }.element_count(), 12);
        assert_eq!(OperandKind::Matrix { rows: 0, cols: 4 }.element_count(), 0);
    }

    #[test]
    fn test_result_row_queries() {
        let mut row = ResultRow::new("r = a + b", Shape::new(vec![1000]));
        row.push("nalgebra", 300);
        row.push("ndarray", 120);
        row.push("dense", 450);

        assert_eq!(row.label(), "r = a + b (1000)");
        assert_eq!(row.get("ndarray"), Some(120));
        assert_eq!(row.get("eigen"), None);
        assert_eq!(row.fastest().map(|t| t.implementation.as_str()), Some("ndarray"));
        assert_eq!(row.slowest().map(|t| t.implementation.as_str()), Some("dense"));
    }

    #[test]
    fn test_result_row_serialization() {
        let mut row = ResultRow::new("dot", Shape::new(vec![10]));
        row.push("dense", 5);
        row.verification = Some(Verification::Agreed);

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["shape"], serde_json::json!([10]));
        assert_eq!(json["verification"]["status"], "agreed");
        assert_eq!(json["timings"][0]["micros"], 5);
    }
}
