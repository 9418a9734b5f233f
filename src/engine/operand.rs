//! オペランドの能力インターフェースと汎用ワークロード
//!
//! ベクトル・行列のどちらでも同じ乱数化・計測ループを使えるよう、
//! 実装ごとのコンテナ型はこの `Operand` を実装する。

use super::random::Randomizer;
use crate::core::{OperandKind, Workload};

/// 計測対象となる数値コンテナの能力
pub trait Operand {
    /// 形状と種類
    fn kind(&self) -> OperandKind;

    /// 全要素を乱数で上書き
    ///
    /// ベクトルは要素の走査、行列は (行, 列) の添字で書き込む
    fn randomize(&mut self, rng: &mut Randomizer);

    /// 行優先順の値の列
    fn to_row_major(&self) -> Vec<f64>;
}

/// オペランドの組（先頭要素が演算結果）
pub trait OperandSet {
    /// 組に含まれる全オペランドを順に乱数化
    fn randomize_all(&mut self, rng: &mut Randomizer);

    /// 結果オペランドの値
    fn result_values(&self) -> Vec<f64>;
}

macro_rules! impl_operand_set {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first: Operand, $($rest: Operand),*> OperandSet for ($first, $($rest,)*) {
            #[allow(non_snake_case)]
            fn randomize_all(&mut self, rng: &mut Randomizer) {
                let ($first, $($rest,)*) = self;
                $first.randomize(rng);
                $($rest.randomize(rng);)*
            }

            fn result_values(&self) -> Vec<f64> {
                self.0.to_row_major()
            }
        }
    };
}

impl_operand_set!(A);
impl_operand_set!(A, B);
impl_operand_set!(A, B, C);
impl_operand_set!(A, B, C, D);
impl_operand_set!(A, B, C, D, E);

/// オペランドの組と演算を束縛したワークロード
pub struct Bound<T, F> {
    operands: T,
    operation: F,
}

impl<T, F> Bound<T, F>
where
    T: OperandSet,
    F: FnMut(&mut T),
{
    pub fn new(operands: T, operation: F) -> Self {
        Self {
            operands,
            operation,
        }
    }

    pub fn operands(&self) -> &T {
        &self.operands
    }
}

impl<T, F> Workload for Bound<T, F>
where
    T: OperandSet,
    F: FnMut(&mut T),
{
    fn randomize(&mut self, rng: &mut Randomizer) {
        self.operands.randomize_all(rng);
    }

    fn execute(&mut self) {
        (self.operation)(&mut self.operands);
        std::hint::black_box(&mut self.operands);
    }

    fn output(&self) -> Vec<f64> {
        self.operands.result_values()
    }
}

/// ワークロードをボックス化して返す
pub fn bind<T, F>(operands: T, operation: F) -> Box<dyn Workload>
where
    T: OperandSet + 'static,
    F: FnMut(&mut T) + 'static,
{
    Box::new(Bound::new(operands, operation))
}
