// ケースレイヤー - 演算式の一覧とケースレジストリ

pub mod kernel;
pub mod registry;

pub use kernel::Kernel;
pub use registry::{CaseDefinition, CaseRegistry};
