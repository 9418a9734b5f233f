// 統合テストのエントリーポイント

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod test_cli;
mod test_end_to_end;
mod test_measurement;
