use anyhow::Context;
use clap::Parser;
use ext_icons::core::ConfigProvider;
use ext_icons::utils::logger;
use ext_icons::{CliConfig, IconEngine, IconError, LocalStorage, Settings};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting ext-icons");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let storage = LocalStorage::new(settings.output_dir());
    let engine = IconEngine::from_config(storage, &settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.dry_run {
        tracing::info!("Dry run, nothing will be written");
        for (size, path) in engine.plan() {
            writeln!(out, "Would create {} ({}x{})", path.display(), size, size)
                .context("writing to stdout")?;
        }
        return Ok(());
    }

    match engine.run(&mut out) {
        Ok(summary) => {
            for report in summary.created.iter().filter(|r| r.glyph.is_placeholder()) {
                tracing::debug!("{} uses the placeholder shape", report.path.display());
            }
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &IconError) -> ! {
    tracing::error!(
        "ext-icons failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定退出碼，低嚴重度的錯誤不會傳到這裡
    std::process::exit(e.exit_code().max(1));
}
