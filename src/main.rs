use clap::Parser;
use std::io::Write;
use superchat_tally::config::cli::ResolvedConfig;
use superchat_tally::core::FragmentSource;
use superchat_tally::utils::error::{ErrorSeverity, TallyError};
use superchat_tally::utils::{logger, report, validation::Validate};
use superchat_tally::{
    CliConfig, HtmlDumpSource, HttpSource, SourceKind, TallyEngine, WebDriverSource,
};

fn exit_with(e: &TallyError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn run_with<S: FragmentSource>(source: S, config: &ResolvedConfig) -> anyhow::Result<()> {
    let engine = TallyEngine::new_with_monitoring(source, config.monitor);
    let tally = engine.run(&config.target).await;
    let elapsed = engine.monitor().elapsed();

    let rendered = match report::render(&tally, elapsed, config.format) {
        Ok(rendered) => rendered,
        Err(e) => exit_with(&e),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting superchat-tally");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    match config.source {
        SourceKind::Webdriver => {
            run_with(WebDriverSource::new(config.fetch.clone()), &config).await?
        }
        SourceKind::Http => match HttpSource::new(config.fetch.clone()) {
            Ok(source) => run_with(source, &config).await?,
            Err(e) => exit_with(&e),
        },
        SourceKind::File => {
            run_with(HtmlDumpSource::new(config.fetch.selector.clone()), &config).await?
        }
    }

    Ok(())
}
