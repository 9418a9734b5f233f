//! 比較表の出力
//!
//! 固定幅・パイプ区切りの表を出力する。実装が 3 つ以上ある行では
//! 最速を緑、最遅を赤で色付けする（幅は色を除いた文字列で計算）。

use crate::core::{BenchResult, ResultRow, RowReporter, Verification};
use crate::engine::format_duration;
use std::io::{IsTerminal, Write};

const CASE_WIDTH: usize = 24;
const SHAPE_WIDTH: usize = 16;
const DURATION_WIDTH: usize = 12;

/// 色付けに必要な最小の実装数
pub const MIN_TIMINGS_FOR_HIGHLIGHT: usize = 3;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// 設定で有効かつ出力先が端末のときだけ色付けする
pub fn color_enabled<T: IsTerminal>(requested: bool, stream: &T) -> bool {
    requested && stream.is_terminal()
}

/// 比較表を書き出すレポーター
pub struct TableReporter<W: Write> {
    writer: W,
    colorize: bool,
    implementations: Vec<String>,
    rule: String,
}

impl<W: Write> TableReporter<W> {
    pub fn new(writer: W, colorize: bool) -> Self {
        Self {
            writer,
            colorize,
            implementations: Vec::new(),
            rule: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn header_line(&self) -> String {
        let mut line = format!("| {:<CASE_WIDTH$} | {:<SHAPE_WIDTH$} |", "Case", "Shape");
        for name in &self.implementations {
            line.push_str(&format!(" {name:>DURATION_WIDTH$} |"));
        }
        line
    }

    fn row_line(&self, row: &ResultRow) -> String {
        let mut line = format!(
            "| {:<CASE_WIDTH$} | {:<SHAPE_WIDTH$} |",
            row.case,
            row.shape.label()
        );

        let (fastest, slowest) = highlight_bounds(row, self.colorize);

        for name in &self.implementations {
            let cell = match row.get(name) {
                Some(micros) => {
                    let text = format!("{:>DURATION_WIDTH$}", format_duration(micros));
                    if Some(micros) == fastest {
                        format!("{GREEN}{text}{RESET}")
                    } else if Some(micros) == slowest {
                        format!("{RED}{text}{RESET}")
                    } else {
                        text
                    }
                }
                None => format!("{:>DURATION_WIDTH$}", "-"),
            };
            line.push_str(&format!(" {cell} |"));
        }

        if let Some(Verification::Mismatch { implementation, .. }) = &row.verification {
            line.push_str(&format!(" mismatch: {implementation}"));
        }

        line
    }
}

/// 色付けする最小値・最大値（対象外なら None）
fn highlight_bounds(row: &ResultRow, colorize: bool) -> (Option<u64>, Option<u64>) {
    if !colorize || row.timings.len() < MIN_TIMINGS_FOR_HIGHLIGHT {
        return (None, None);
    }

    match (row.fastest(), row.slowest()) {
        (Some(min), Some(max)) if min.micros != max.micros => (Some(min.micros), Some(max.micros)),
        _ => (None, None),
    }
}

impl<W: Write> RowReporter for TableReporter<W> {
    fn begin(&mut self, implementations: &[String]) -> BenchResult<()> {
        self.implementations = implementations.to_vec();
        let header = self.header_line();
        self.rule = "-".repeat(header.chars().count());

        writeln!(self.writer, "{}", self.rule)?;
        writeln!(self.writer, "{header}")?;
        writeln!(self.writer, "{}", self.rule)?;
        Ok(())
    }

    fn row(&mut self, row: &ResultRow) -> BenchResult<()> {
        let line = self.row_line(row);
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> BenchResult<()> {
        writeln!(self.writer, "{}", self.rule)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// 何も出力しないレポーター
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl RowReporter for NoOpReporter {
    fn begin(&mut self, _implementations: &[String]) -> BenchResult<()> {
        Ok(())
    }

    fn row(&mut self, _row: &ResultRow) -> BenchResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> BenchResult<()> {
        Ok(())
    }
}
