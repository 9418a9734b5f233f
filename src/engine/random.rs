//! 乱数によるオペランド初期化
//!
//! 実行全体で一本の乱数列を共有するため、生成器はグローバルではなく
//! 実行コンテキストが所有し、必要な箇所へ明示的に渡す。

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 要素値の下限
pub const VALUE_MIN: f64 = -1000.0;
/// 要素値の上限
pub const VALUE_MAX: f64 = 1000.0;

/// 一様分布 [-1000.0, 1000.0] から値を引く乱数ハンドル
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
    distribution: Uniform<f64>,
    seed: u64,
}

impl Randomizer {
    /// 指定シードで初期化
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            distribution: Uniform::new_inclusive(VALUE_MIN, VALUE_MAX),
            seed,
        }
    }

    /// 現在時刻をシードとして初期化
    pub fn from_clock() -> Self {
        let nanos = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_else(|| chrono::Utc::now().timestamp_micros());
        Self::with_seed(nanos as u64)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 一つの値を引く
    pub fn next_value(&mut self) -> f64 {
        self.rng.sample(self.distribution)
    }

    /// 要素を順に辿れるオペランド（ベクトル）を上書き
    pub fn fill_elements<'a, I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = &'a mut f64>,
    {
        for element in elements {
            *element = self.next_value();
        }
    }

    /// 行・列で添字アクセスするオペランド（行列）を行優先順で上書き
    ///
    /// 格納順に依存しないため、同じシードなら実装間で同じ値が入る
    pub fn fill_indexed<F>(&mut self, rows: usize, cols: usize, mut set: F)
    where
        F: FnMut(usize, usize, f64),
    {
        for i in 0..rows {
            for j in 0..cols {
                set(i, j, self.next_value());
            }
        }
    }
}
