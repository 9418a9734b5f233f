pub mod backends;
pub mod cases;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod report;

use crate::cases::CaseRegistry;
use crate::core::{Backend, BenchConfig, BenchResult, ResultRow, RowReporter};
use crate::engine::{CaseRunner, Randomizer};

// DIコンテナの役割を果たすジェネリックなスイート構造体
// 設定と出力先を型パラメータで受け取り、実装一覧は実行時に選択する
pub struct BenchSuite<C, R>
where
    C: BenchConfig,
    R: RowReporter,
{
    registry: CaseRegistry,
    backends: Vec<Box<dyn Backend>>,
    config: C,
    reporter: R,
}

impl<C, R> BenchSuite<C, R>
where
    C: BenchConfig,
    R: RowReporter,
{
    /// 新しいスイートを作成（コンストラクタインジェクション）
    pub fn new(
        registry: CaseRegistry,
        backends: Vec<Box<dyn Backend>>,
        config: C,
        reporter: R,
    ) -> Self {
        Self {
            registry,
            backends,
            config,
            reporter,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// 形状数の上限を反映した実行対象のケース一覧
    pub fn planned_registry(&self) -> CaseRegistry {
        match self.config.max_shapes_per_case() {
            Some(limit) => self.registry.limit_shapes(limit),
            None => self.registry.clone(),
        }
    }

    pub fn implementation_names(&self) -> Vec<String> {
        self.backends.iter().map(|b| b.name().to_string()).collect()
    }

    /// 全ケース × 全形状を登録順に計測し、行ごとにレポーターへ流す
    pub fn run(&mut self, rng: &mut Randomizer) -> BenchResult<Vec<ResultRow>> {
        let registry = self.planned_registry();
        if registry.is_empty() {
            log::warn!("計測対象のケースがありません");
        }

        log::info!(
            "計測開始: {} ケース / {} 行 / 実装 {:?} / seed {}",
            registry.len(),
            registry.row_count(),
            self.implementation_names(),
            rng.seed()
        );

        let runner = CaseRunner::new(&self.config, &self.backends);
        self.reporter.begin(&runner.implementation_names())?;

        let mut rows = Vec::with_capacity(registry.row_count());
        for case in registry.cases() {
            log::info!("ケース: {} ({} 形状)", case.name(), case.shapes().len());
            for shape in case.shapes() {
                let row = runner.run(case, shape, rng)?;
                self.reporter.row(&row)?;
                rows.push(row);
            }
        }

        self.reporter.finish()?;
        log::info!("計測完了: {} 行", rows.len());
        Ok(rows)
    }
}
