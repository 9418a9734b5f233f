// レポート層 - 比較表と JSON レポート

pub mod json;
pub mod table;

pub use json::JsonReport;
pub use table::{color_enabled, NoOpReporter, TableReporter};
