//! 実装間の出力照合
//!
//! 全実装に同じシードから同じ入力を与えて一回ずつ実行し、
//! 結果オペランドを先頭の実装と比較する。

use super::random::Randomizer;
use crate::cases::Kernel;
use crate::core::{Backend, BenchResult, Shape, Verification};

/// 照合の既定の相対許容誤差
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// `|x - y| <= tol * max(1, |x|, |y|)` で比較
pub fn approx_eq(expected: f64, actual: f64, tolerance: f64) -> bool {
    if expected == actual {
        return true;
    }
    let scale = 1.0_f64.max(expected.abs()).max(actual.abs());
    (expected - actual).abs() <= tolerance * scale
}

/// 一つのケース・形状について全実装の出力を照合
///
/// 最初に見つかった不一致を返す。長さの違いも不一致とする
pub fn cross_check<B>(
    kernel: Kernel,
    shape: &Shape,
    backends: &[B],
    seed: u64,
    tolerance: f64,
) -> BenchResult<Verification>
where
    B: Backend,
{
    let Some((first, rest)) = backends.split_first() else {
        return Ok(Verification::Agreed);
    };
    let reference = run_once(first, kernel, shape, seed)?;

    for backend in rest {
        let output = run_once(backend, kernel, shape, seed)?;

        if let Some((index, expected, actual)) = first_mismatch(&reference, &output, tolerance) {
            log::warn!(
                "出力が一致しません: {} ({}) {} [{}] 期待値 {} 実際 {}",
                kernel.expression(),
                shape,
                backend.name(),
                index,
                expected,
                actual
            );
            return Ok(Verification::Mismatch {
                implementation: backend.name().to_string(),
                index,
                expected,
                actual,
            });
        }
    }

    Ok(Verification::Agreed)
}

/// 新しいオペランドに乱数を入れて一回実行し、結果を取り出す
fn run_once<B: Backend>(backend: &B, kernel: Kernel, shape: &Shape, seed: u64) -> BenchResult<Vec<f64>> {
    let mut workload = backend.prepare(kernel, shape)?;
    let mut rng = Randomizer::with_seed(seed);
    workload.randomize(&mut rng);
    workload.execute();
    Ok(workload.output())
}

fn first_mismatch(expected: &[f64], actual: &[f64], tolerance: f64) -> Option<(usize, f64, f64)> {
    if let Some((index, (x, y))) = expected
        .iter()
        .zip(actual)
        .enumerate()
        .find(|(_, (x, y))| !approx_eq(**x, **y, tolerance))
    {
        return Some((index, *x, *y));
    }

    if expected.len() != actual.len() {
        // 短い側の末尾を NaN として報告
        let index = expected.len().min(actual.len());
        let x = expected.get(index).copied().unwrap_or(f64::NAN);
        let y = actual.get(index).copied().unwrap_or(f64::NAN);
        return Some((index, x, y));
    }

    None
}
