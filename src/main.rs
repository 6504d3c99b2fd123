use anyhow::Context;
use clap::Parser;
use pkgconf_flags::config::toml_config::TomlConfig;
use pkgconf_flags::core::render::render;
use pkgconf_flags::core::FlagSource;
use pkgconf_flags::utils::error::ErrorSeverity;
use pkgconf_flags::utils::logger;
use pkgconf_flags::utils::validation::Validate;
use pkgconf_flags::{
    CliConfig, ExtractionEngine, ExtractionReport, FileSource, InlineSource, InputSpec,
    PkgFlagsError, Settings, StdinSource,
};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_format);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let report = match run(&settings).await {
        Ok(report) => report,
        Err(e) => exit_with(e),
    };

    let output = match render(&report, settings.format) {
        Ok(output) => output,
        Err(e) => exit_with(e),
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write output")?;

    Ok(())
}

fn load_settings(cli: &CliConfig) -> pkgconf_flags::Result<Settings> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    Settings::resolve(cli.overrides(), file.as_ref())
}

async fn run(settings: &Settings) -> pkgconf_flags::Result<ExtractionReport> {
    match &settings.input {
        InputSpec::Inline { flags, split } => {
            let source = if *split {
                InlineSource::splitting(flags.clone())
            } else {
                InlineSource::new(flags.clone())
            };
            extract_from(source, &settings.prefixes).await
        }
        InputSpec::File(path) => {
            extract_from(FileSource::new(path.clone()), &settings.prefixes).await
        }
        InputSpec::Stdin => extract_from(StdinSource::new(), &settings.prefixes).await,
    }
}

async fn extract_from<S: FlagSource>(
    source: S,
    prefixes: &[String],
) -> pkgconf_flags::Result<ExtractionReport> {
    ExtractionEngine::new(source, prefixes.to_vec()).run().await
}

fn exit_with(e: PkgFlagsError) -> ! {
    tracing::error!(
        "❌ Extraction failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
