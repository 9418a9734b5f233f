// ベンチマーク実行時のエラー型定義
// 形状検証・設定・出力の各エラーを一つの列挙型にまとめる

use thiserror::Error;

/// ベンチマーク固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("形状の次元数エラー: {case} - 期待値 {expected} 次元, 実際 {actual} 次元")]
    ShapeArity {
        case: String,
        expected: usize,
        actual: usize,
    },

    #[error("形状不整合エラー: {case} - {reason}")]
    ShapeMismatch { case: String, reason: String },

    #[error("未知の実装: {name}")]
    UnknownBackend { name: String },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("出力エラー: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },

    #[error("レポートエラー: {source}")]
    Report {
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 次元数エラーの作成
    pub fn shape_arity(case: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeArity {
            case: case.into(),
            expected,
            actual,
        }
    }

    /// 形状不整合エラーの作成
    pub fn shape_mismatch(case: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            case: case.into(),
            reason: reason.into(),
        }
    }

    /// 未知の実装エラーの作成
    pub fn unknown_backend(name: impl Into<String>) -> Self {
        Self::UnknownBackend { name: name.into() }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// レポートエラーの作成
    pub fn report(source: anyhow::Error) -> Self {
        Self::Report { source }
    }

    /// 静的なケース定義の誤りかどうか
    ///
    /// 形状エラーはケース一覧そのもののバグであり、実行時に回復できない
    pub fn is_definition_error(&self) -> bool {
        matches!(self, Self::ShapeArity { .. } | Self::ShapeMismatch { .. })
    }
}

impl From<std::io::Error> for BenchError {
    fn from(error: std::io::Error) -> Self {
        BenchError::Output { source: error }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(error: serde_json::Error) -> Self {
        BenchError::Report {
            source: error.into(),
        }
    }
}

/// ベンチマークの結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;
