use clap::Parser;
use currency_words::config::toml_config::TomlConfig;
use currency_words::domain::ports::ConfigProvider;
use currency_words::utils::error::{AppError, ErrorSeverity};
use currency_words::utils::{logger, validation::Validate};
use currency_words::{
    format_currency, registry, BatchConverter, CliConfig, Conversion, OutputFormat, Settings,
};
use std::fs::File;
use std::io::{self, BufReader, Write};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting currency-words CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        println!("{}", e.user_friendly_message());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), AppError> {
    // 驗證配置
    config.validate()?;

    if config.list_currencies {
        return list_currencies();
    }

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            Some(file_config)
        }
        None => None,
    };

    // 命令列參數優先於設定檔
    let mut layers: Vec<&dyn ConfigProvider> = Vec::with_capacity(2);
    layers.push(config);
    if let Some(file_config) = &file_config {
        layers.push(file_config);
    }
    let settings = Settings::resolve(&layers);
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    match &config.input {
        Some(input) => run_batch(input, &settings),
        None => run_single(&settings),
    }
}

fn run_single(settings: &Settings) -> Result<(), AppError> {
    let words = format_currency(settings.amount, &settings.currency)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let conversion = Conversion {
        amount: settings.amount,
        currency: settings.currency.clone(),
        words: Some(words),
        error: None,
    };

    match settings.format {
        OutputFormat::Text => writeln!(out, "{}", conversion.words.as_deref().unwrap_or_default())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &conversion)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            BatchConverter::new(settings.currency.as_str(), settings.format)
                .load(std::slice::from_ref(&conversion), &mut out)?;
        }
    }

    Ok(())
}

fn run_batch(input: &str, settings: &Settings) -> Result<(), AppError> {
    let converter = BatchConverter::new(settings.currency.as_str(), settings.format);
    let stdout = io::stdout();

    let summary = if input == "-" {
        tracing::info!("📥 Reading amounts from stdin");
        converter.run(io::stdin().lock(), stdout.lock())?
    } else {
        tracing::info!("📥 Reading amounts from: {}", input);
        let file = File::open(input)?;
        converter.run(BufReader::new(file), stdout.lock())?
    };

    if summary.failed > 0 {
        tracing::warn!("⚠️ {} of {} rows failed", summary.failed, summary.total);
    }
    Ok(())
}

fn list_currencies() -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for currency in registry::all() {
        writeln!(
            out,
            "{:<5} {} / {}, {} / {}",
            currency.code,
            currency.unit,
            currency.unit_plural,
            currency.subunit,
            currency.subunit_plural
        )?;
    }
    Ok(())
}
