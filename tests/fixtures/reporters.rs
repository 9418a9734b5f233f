// 結果行を記録するテスト用レポーター

use linalg_bench::core::{BenchResult, ResultRow, RowReporter};

#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub implementations: Vec<String>,
    pub rows: Vec<ResultRow>,
    pub finished: bool,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RowReporter for CollectingReporter {
    fn begin(&mut self, implementations: &[String]) -> BenchResult<()> {
        self.implementations = implementations.to_vec();
        Ok(())
    }

    fn row(&mut self, row: &ResultRow) -> BenchResult<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> BenchResult<()> {
        self.finished = true;
        Ok(())
    }
}
