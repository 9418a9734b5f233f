// エンジン層 - 計測の中核
// 乱数化・計測・書式化・照合を組み合わせてケースを実行する

pub mod format;
pub mod measure;
pub mod operand;
pub mod random;
pub mod runner;
pub mod verify;

pub use format::format_duration;
pub use measure::{measure, MeasurePlan};
pub use operand::{bind, Operand, OperandSet};
pub use random::Randomizer;
pub use runner::CaseRunner;
pub use verify::{approx_eq, cross_check, DEFAULT_TOLERANCE};
