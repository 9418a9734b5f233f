//! JSON 設定ファイル
//!
//! 全項目が省略可能で、指定された項目だけをプリセットの上に重ねる。
//!
//! ```json
//! {
//!   "warmup_iterations": 20,
//!   "measured_iterations": 50,
//!   "backends": ["nalgebra", "dense"],
//!   "filter": "matrix"
//! }
//! ```

use super::default::DefaultBenchConfig;
use crate::core::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定ファイルの内容（またはコマンドライン引数の上書き分）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchSettings {
    pub warmup_iterations: Option<usize>,
    pub measured_iterations: Option<usize>,
    pub colorize: Option<bool>,
    pub verify: Option<bool>,
    pub verify_tolerance: Option<f64>,
    pub max_shapes_per_case: Option<usize>,
    pub seed: Option<u64>,
    pub backends: Option<Vec<String>>,
    pub filter: Option<String>,
}

impl BenchSettings {
    /// JSON 文字列から読み込み
    pub fn from_json(json: &str) -> BenchResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| BenchError::configuration(format!("設定ファイルの解析に失敗: {e}")))
    }

    /// ファイルから読み込み
    pub fn load(path: &Path) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BenchError::configuration(format!("{} を読み込めません: {e}", path.display()))
        })?;
        log::debug!("設定ファイルを読み込み: {}", path.display());
        Self::from_json(&content)
    }

    /// `other` で指定された項目を優先して重ねる
    pub fn overlay(self, other: BenchSettings) -> Self {
        Self {
            warmup_iterations: other.warmup_iterations.or(self.warmup_iterations),
            measured_iterations: other.measured_iterations.or(self.measured_iterations),
            colorize: other.colorize.or(self.colorize),
            verify: other.verify.or(self.verify),
            verify_tolerance: other.verify_tolerance.or(self.verify_tolerance),
            max_shapes_per_case: other.max_shapes_per_case.or(self.max_shapes_per_case),
            seed: other.seed.or(self.seed),
            backends: other.backends.or(self.backends),
            filter: other.filter.or(self.filter),
        }
    }

    /// 計測設定に反映
    pub fn apply_to(&self, mut config: DefaultBenchConfig) -> DefaultBenchConfig {
        if let Some(iterations) = self.warmup_iterations {
            config = config.with_warmup_iterations(iterations);
        }
        if let Some(iterations) = self.measured_iterations {
            config = config.with_measured_iterations(iterations);
        }
        if let Some(colorize) = self.colorize {
            config = config.with_colorize(colorize);
        }
        if let Some(verify) = self.verify {
            config = config.with_verify(verify);
        }
        if let Some(tolerance) = self.verify_tolerance {
            config = config.with_verify_tolerance(tolerance);
        }
        if let Some(limit) = self.max_shapes_per_case {
            config = config.with_max_shapes_per_case(Some(limit));
        }
        config
    }
}
