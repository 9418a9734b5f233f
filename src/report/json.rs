//! JSON レポートの出力

use crate::core::{BenchConfig, BenchResult, ResultRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 一回の実行全体の記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub suite: String,
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub num_cpus: usize,
    pub warmup_iterations: usize,
    pub measured_iterations: usize,
    pub implementations: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl JsonReport {
    pub fn new<C: BenchConfig + ?Sized>(
        suite: impl Into<String>,
        config: &C,
        seed: u64,
        implementations: Vec<String>,
        rows: Vec<ResultRow>,
    ) -> Self {
        Self {
            suite: suite.into(),
            generated_at: Utc::now(),
            seed,
            num_cpus: num_cpus::get(),
            warmup_iterations: config.warmup_iterations(),
            measured_iterations: config.measured_iterations(),
            implementations,
            rows,
        }
    }

    pub fn to_json_string(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// ファイルに書き出す（既存ファイルは上書き）
    pub fn write_to(&self, path: &Path) -> BenchResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        log::info!("JSON レポートを書き出しました: {}", path.display());
        Ok(())
    }
}
