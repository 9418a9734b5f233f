use crate::config::{BenchSettings, DefaultPreset, Preset, QuickPreset};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linalg_bench")]
#[command(about = "Compare linear algebra expression timings across numeric libraries")]
#[command(version)]
pub struct Cli {
    /// Configuration preset
    #[arg(long, value_enum, default_value_t = PresetName::Default)]
    pub preset: PresetName,

    /// JSON settings file applied on top of the preset
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only run cases whose name or id contains PATTERN (case-insensitive)
    #[arg(short, long, value_name = "PATTERN")]
    pub filter: Option<String>,

    /// Implementation to compare (repeatable; default: all)
    #[arg(short, long = "backend", value_name = "NAME")]
    pub backends: Vec<String>,

    /// Number of warm-up iterations per measurement
    #[arg(long, value_name = "N")]
    pub warmup: Option<usize>,

    /// Number of measured iterations per measurement
    #[arg(short = 'n', long, value_name = "N")]
    pub repeat: Option<usize>,

    /// Seed for the random operand values (default: clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable fastest/slowest highlighting
    #[arg(long)]
    pub no_color: bool,

    /// Cross-check the outputs of all implementations
    #[arg(long)]
    pub verify: bool,

    /// Write a JSON report to FILE
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// List the registered cases and implementations, then exit
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetName {
    Default,
    Quick,
}

impl PresetName {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => DefaultPreset::NAME,
            Self::Quick => QuickPreset::NAME,
        }
    }
}

impl Cli {
    /// コマンドライン引数で明示された項目だけを設定として取り出す
    pub fn overrides(&self) -> BenchSettings {
        BenchSettings {
            warmup_iterations: self.warmup,
            measured_iterations: self.repeat,
            colorize: self.no_color.then_some(false),
            verify: self.verify.then_some(true),
            verify_tolerance: None,
            max_shapes_per_case: None,
            seed: self.seed,
            backends: (!self.backends.is_empty()).then(|| self.backends.clone()),
            filter: self.filter.clone(),
        }
    }

    /// ログレベル（`-v` の数で決まる）
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
