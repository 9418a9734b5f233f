// ベンチマークシステムのトレイト定義
// 実装差し替え可能な抽象化インターフェースを定義

use super::error::BenchResult;
use super::types::{ResultRow, Shape};
use crate::cases::Kernel;
use crate::engine::random::Randomizer;
use mockall::automock;

/// 計測設定を抽象化するトレイト
#[automock]
pub trait BenchConfig {
    /// ウォームアップの繰り返し回数
    fn warmup_iterations(&self) -> usize;

    /// 計測の繰り返し回数
    fn measured_iterations(&self) -> usize;

    /// 最速・最遅の色付けを行うかどうか
    fn colorize(&self) -> bool;

    /// 実装間の出力照合を行うかどうか
    fn verify_outputs(&self) -> bool;

    /// 出力照合の相対許容誤差
    fn verify_tolerance(&self) -> f64;

    /// ケースごとに計測する形状数の上限
    fn max_shapes_per_case(&self) -> Option<usize>;
}

impl BenchConfig for Box<dyn BenchConfig> {
    fn warmup_iterations(&self) -> usize {
        self.as_ref().warmup_iterations()
    }

    fn measured_iterations(&self) -> usize {
        self.as_ref().measured_iterations()
    }

    fn colorize(&self) -> bool {
        self.as_ref().colorize()
    }

    fn verify_outputs(&self) -> bool {
        self.as_ref().verify_outputs()
    }

    fn verify_tolerance(&self) -> f64 {
        self.as_ref().verify_tolerance()
    }

    fn max_shapes_per_case(&self) -> Option<usize> {
        self.as_ref().max_shapes_per_case()
    }
}

/// 一つの実装・一つの形状に束縛された計測対象
///
/// オペランドを所有し、乱数での上書き・演算の実行・結果の取り出しを提供する
#[automock]
pub trait Workload {
    /// 全オペランドを乱数で上書き
    fn randomize(&mut self, rng: &mut Randomizer);

    /// 演算を一回実行
    fn execute(&mut self);

    /// 結果オペランドを行優先順で取り出す
    fn output(&self) -> Vec<f64>;
}

/// 数値ライブラリ実装の抽象化トレイト
#[automock]
pub trait Backend {
    /// 表に表示する実装名
    fn name(&self) -> &'static str;

    /// 指定形状の新しいオペランドを生成し、演算を束縛する
    fn prepare(&self, kernel: Kernel, shape: &Shape) -> BenchResult<Box<dyn Workload>>;
}

impl Backend for Box<dyn Backend> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn prepare(&self, kernel: Kernel, shape: &Shape) -> BenchResult<Box<dyn Workload>> {
        self.as_ref().prepare(kernel, shape)
    }
}

/// 結果行の出力先を抽象化するトレイト
#[automock]
pub trait RowReporter {
    /// ヘッダーの出力
    fn begin(&mut self, implementations: &[String]) -> BenchResult<()>;

    /// 結果行の出力
    fn row(&mut self, row: &ResultRow) -> BenchResult<()>;

    /// 末尾の出力
    fn finish(&mut self) -> BenchResult<()>;
}

impl RowReporter for Box<dyn RowReporter> {
    fn begin(&mut self, implementations: &[String]) -> BenchResult<()> {
        self.as_mut().begin(implementations)
    }

    fn row(&mut self, row: &ResultRow) -> BenchResult<()> {
        self.as_mut().row(row)
    }

    fn finish(&mut self) -> BenchResult<()> {
        self.as_mut().finish()
    }
}
