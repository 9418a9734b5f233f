//! 名前付きの設定プリセット
//!
//! 各プリセットは型として表現し、名前・説明・初期設定を定数と関連関数で持つ。

use super::default::DefaultBenchConfig;

/// 設定プリセット
pub trait Preset {
    /// 設定名
    const NAME: &'static str;

    /// 説明
    const DESCRIPTION: &'static str;

    /// プリセットの初期設定
    fn config() -> DefaultBenchConfig;
}

/// 標準プリセット（ウォームアップ 100 回・計測 100 回）
pub struct DefaultPreset;

impl Preset for DefaultPreset {
    const NAME: &'static str = "default";
    const DESCRIPTION: &'static str = "全形状を標準の繰り返し回数で計測";

    fn config() -> DefaultBenchConfig {
        DefaultBenchConfig::new()
    }
}

/// 動作確認用の短いプリセット
pub struct QuickPreset;

impl Preset for QuickPreset {
    const NAME: &'static str = "quick";
    const DESCRIPTION: &'static str = "各ケース先頭 2 形状のみ、10 回ずつ計測して出力を照合";

    fn config() -> DefaultBenchConfig {
        DefaultBenchConfig::new()
            .with_warmup_iterations(10)
            .with_measured_iterations(10)
            .with_max_shapes_per_case(Some(2))
            .with_verify(true)
    }
}

/// プリセット名から初期設定を取得
pub fn by_name(name: &str) -> Option<DefaultBenchConfig> {
    match name {
        DefaultPreset::NAME => Some(DefaultPreset::config()),
        QuickPreset::NAME => Some(QuickPreset::config()),
        _ => None,
    }
}

/// (名前, 説明) の一覧
pub fn descriptions() -> [(&'static str, &'static str); 2] {
    [
        (DefaultPreset::NAME, DefaultPreset::DESCRIPTION),
        (QuickPreset::NAME, QuickPreset::DESCRIPTION),
    ]
}
