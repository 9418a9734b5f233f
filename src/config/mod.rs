// 設定層 - 計測設定・プリセット・設定ファイル
// 優先順位: プリセット → 設定ファイル → コマンドライン引数

pub mod default;
pub mod presets;
pub mod settings;

pub use default::DefaultBenchConfig;
pub use presets::{DefaultPreset, Preset, QuickPreset};
pub use settings::BenchSettings;
