use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use linalg_bench::{
    backends,
    cases::CaseRegistry,
    cli::{Cli, PresetName},
    config::{presets, BenchSettings, DefaultBenchConfig, DefaultPreset, Preset, QuickPreset},
    core::{Backend, BenchConfig},
    engine::Randomizer,
    report::{color_enabled, JsonReport, TableReporter},
    BenchSuite,
};

const SUITE_NAME: &str = "standard";

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    // 1. 設定の組み立て（プリセット → 設定ファイル → 引数）
    let file_settings = match &cli.config {
        Some(path) => BenchSettings::load(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?,
        None => BenchSettings::default(),
    };
    let settings = file_settings.overlay(cli.overrides());
    let config = settings.apply_to(preset_config(cli.preset));
    config.validate().context("設定が不正です")?;
    log::debug!("プリセット: {} / 設定: {config:?}", cli.preset.name());

    // 2. ケースと実装の選択
    let mut registry = CaseRegistry::standard().context("ケース定義が不正です")?;
    if let Some(pattern) = &settings.filter {
        registry = registry.filter(pattern);
        if registry.is_empty() {
            log::warn!("フィルタ '{pattern}' に一致するケースがありません");
        }
    }
    let selected = backends::select(settings.backends.as_deref().unwrap_or_default())
        .context("実装の選択に失敗しました")?;

    if cli.list {
        print_list(&registry, &selected)?;
        return Ok(());
    }

    // 3. 計測
    let mut rng = match settings.seed {
        Some(seed) => Randomizer::with_seed(seed),
        None => Randomizer::from_clock(),
    };
    let seed = rng.seed();

    let stdout = std::io::stdout();
    let colorize = color_enabled(config.colorize(), &stdout);
    let reporter = TableReporter::new(stdout.lock(), colorize);
    let mut suite = BenchSuite::new(registry, selected, config.clone(), reporter);
    let implementations = suite.implementation_names();
    let rows = suite.run(&mut rng).context("ベンチマークの実行に失敗しました")?;

    // 4. JSON レポート
    if let Some(path) = &cli.json {
        JsonReport::new(SUITE_NAME, &config, seed, implementations, rows)
            .write_to(path)
            .with_context(|| format!("JSON レポートを書き出せません: {}", path.display()))?;
    }

    Ok(())
}

fn preset_config(preset: PresetName) -> DefaultBenchConfig {
    match preset {
        PresetName::Default => DefaultPreset::config(),
        PresetName::Quick => QuickPreset::config(),
    }
}

fn print_list(registry: &CaseRegistry, selected: &[Box<dyn Backend>]) -> Result<()> {
    let mut out = std::io::stdout().lock();

    writeln!(out, "📋 ケース一覧 ({} 件)", registry.len())?;
    for case in registry.cases() {
        let shapes: Vec<String> = case.shapes().iter().map(|s| s.label()).collect();
        writeln!(
            out,
            "   - {} [{}]: {}",
            case.name(),
            case.kernel().id(),
            shapes.join(", ")
        )?;
    }

    let names: Vec<&str> = selected.iter().map(|b| b.name()).collect();
    writeln!(out, "⚙️  実装: {}", names.join(", "))?;

    writeln!(out, "🎛️  プリセット:")?;
    for (name, description) in presets::descriptions() {
        writeln!(out, "   - {name}: {description}")?;
    }

    Ok(())
}
