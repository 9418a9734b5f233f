// バックエンド層 - 比較対象の数値ライブラリ実装
// 各実装は Backend トレイトを通じて実行時に選択される

pub mod dense;
pub mod nalgebra_backend;
pub mod ndarray_backend;

pub use dense::DenseBackend;
pub use nalgebra_backend::NalgebraBackend;
pub use ndarray_backend::NdarrayBackend;

use crate::core::{Backend, BenchError, BenchResult};

/// 利用可能な実装名（表の列順）
pub const NAMES: [&str; 3] = [
    NalgebraBackend::NAME,
    NdarrayBackend::NAME,
    DenseBackend::NAME,
];

/// 全実装を表の列順で返す
pub fn all() -> Vec<Box<dyn Backend>> {
    vec![
        Box::new(NalgebraBackend::new()),
        Box::new(NdarrayBackend::new()),
        Box::new(DenseBackend::new()),
    ]
}

/// 名前から実装を作成
pub fn by_name(name: &str) -> BenchResult<Box<dyn Backend>> {
    match name.to_lowercase().as_str() {
        NalgebraBackend::NAME => Ok(Box::new(NalgebraBackend::new())),
        NdarrayBackend::NAME => Ok(Box::new(NdarrayBackend::new())),
        DenseBackend::NAME => Ok(Box::new(DenseBackend::new())),
        _ => Err(BenchError::unknown_backend(name)),
    }
}

/// 指定された名前の実装を指定順で返す。空なら全実装
///
/// 表の列は実装名で引くため、同じ実装の重複指定はエラーにする
pub fn select<S: AsRef<str>>(names: &[S]) -> BenchResult<Vec<Box<dyn Backend>>> {
    if names.is_empty() {
        return Ok(all());
    }

    let mut selected: Vec<Box<dyn Backend>> = Vec::with_capacity(names.len());
    for name in names {
        let backend = by_name(name.as_ref())?;
        if selected.iter().any(|b| b.name() == backend.name()) {
            return Err(BenchError::validation(
                "backends",
                format!("実装 '{}' が重複して指定されています", backend.name()),
            ));
        }
        selected.push(backend);
    }
    Ok(selected)
}
