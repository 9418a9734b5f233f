//! 計測プリミティブ
//!
//! ウォームアップと本計測の二段階で、一つのワークロードの実行時間を測る。
//! どちらの段階でも毎回オペランドを乱数で上書きし、乱数化の時間は計測に含めない。

use super::random::Randomizer;
use crate::core::Workload;
use std::time::{Duration, Instant};

/// 計測の繰り返し回数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurePlan {
    pub warmup_iterations: usize,
    pub measured_iterations: usize,
}

impl MeasurePlan {
    pub const DEFAULT_ITERATIONS: usize = 100;

    pub fn new(warmup_iterations: usize, measured_iterations: usize) -> Self {
        Self {
            warmup_iterations,
            measured_iterations,
        }
    }
}

impl Default for MeasurePlan {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS, Self::DEFAULT_ITERATIONS)
    }
}

/// ワークロードを計測し、本計測の合計時間をマイクロ秒で返す
///
/// 平均ではなく合計を返す。ゼロサイズのオペランドでも両段階を完走し、0 を返しうる
pub fn measure<W>(workload: &mut W, rng: &mut Randomizer, plan: MeasurePlan) -> u64
where
    W: Workload + ?Sized,
{
    for _ in 0..plan.warmup_iterations {
        workload.randomize(rng);
        workload.execute();
    }

    let mut total = Duration::ZERO;
    for _ in 0..plan.measured_iterations {
        workload.randomize(rng);

        let start = Instant::now();
        workload.execute();
        total += start.elapsed();
    }

    u64::try_from(total.as_micros()).unwrap_or(u64::MAX)
}
