//! マイクロ秒の合計値を人間が読める文字列に変換する

const MICROS_PER_MILLI: u64 = 1_000;
const MICROS_PER_SECOND: u64 = 1_000_000;

/// マイクロ秒を `s` / `ms` / `us` 単位の短い文字列に変換
///
/// 小数部は整数演算で正確に求め、末尾の 0 と不要な小数点を取り除く。
///
/// ```
/// use linalg_bench::engine::format_duration;
///
/// assert_eq!(format_duration(999), "999us");
/// assert_eq!(format_duration(1_500), "1.5ms");
/// assert_eq!(format_duration(1_000_000), "1s");
/// ```
pub fn format_duration(micros: u64) -> String {
    if micros >= MICROS_PER_SECOND {
        with_unit(micros, MICROS_PER_SECOND, 6, "s")
    } else if micros >= MICROS_PER_MILLI {
        with_unit(micros, MICROS_PER_MILLI, 3, "ms")
    } else {
        format!("{micros}us")
    }
}

fn with_unit(micros: u64, scale: u64, digits: usize, unit: &str) -> String {
    let whole = micros / scale;
    let fraction = micros % scale;
    if fraction == 0 {
        return format!("{whole}{unit}");
    }

    let fraction = format!("{fraction:0digits$}");
    format!("{whole}.{}{unit}", fraction.trim_end_matches('0'))
}
