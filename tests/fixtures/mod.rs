// テストユーティリティ
// 統合テストで共有する設定・ケース・レポーターのヘルパー

pub mod reporters;

pub use reporters::CollectingReporter;

use linalg_bench::cases::{CaseDefinition, CaseRegistry, Kernel};
use linalg_bench::config::DefaultBenchConfig;
use linalg_bench::core::Shape;
use std::path::PathBuf;

/// 統合テスト用の短い計測設定
pub fn fast_config() -> DefaultBenchConfig {
    DefaultBenchConfig::new()
        .with_warmup_iterations(2)
        .with_measured_iterations(5)
        .with_colorize(false)
}

/// 一つのケースだけを登録したレジストリ
pub fn single_case_registry(name: &str, kernel: Kernel, shapes: &[&[usize]]) -> CaseRegistry {
    let shapes = shapes.iter().map(|dims| Shape::from(*dims)).collect();
    let mut registry = CaseRegistry::new();
    registry.register(CaseDefinition::new(name, kernel, shapes).unwrap());
    registry
}

/// ビルド済みのバイナリのパス
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_linalg_bench"))
}
