use anyhow::Context;
use clap::Parser;
use stable_match::adapters::parse_preferences;
use stable_match::core::validator;
use stable_match::domain::ports::ConfigProvider;
use stable_match::utils::{logger, validation::Validate};
use stable_match::{LocalStorage, MatchRunner, MatchingPipeline, OutputFormat, RunOutcome, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-match")]
#[command(about = "Stable matching driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "stable-match.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override [matching] verify_stability
    #[arg(long)]
    verify: Option<bool>,

    /// Override [output] format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Parse and validate the input without matching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置，日誌設定也在裡面，所以先載入再初始化日誌
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    if config.json_logging() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger_with_level(config.log_level(), args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based stable matching");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 套用命令列覆蓋設定
    if let Some(verify) = args.verify {
        config.matching.verify_stability = verify;
        tracing::info!("🔧 Stability verification overridden to: {}", verify);
    }
    if let Some(format) = args.format {
        config.output.format = format;
        tracing::info!("🔧 Output format overridden to: {}", format);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - input is parsed and validated only");
        return perform_dry_run(&config);
    }

    let storage = LocalStorage::new(".".to_string());
    let runner = MatchRunner::new(MatchingPipeline::new(storage, config));

    match runner.run().await {
        Ok(RunOutcome::Empty) => tracing::info!("✅ No matches requested"),
        Ok(RunOutcome::Written {
            destination, pairs, ..
        }) => tracing::info!("✅ {} stable pairs written to {}", pairs, destination),
        Err(e) => {
            tracing::error!(
                "❌ Matching failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Input: {}", config.input_path());
    tracing::info!("   Output: {}", config.output_path().unwrap_or("stdout"));
    tracing::info!("   Format: {}", config.output_format());
    tracing::info!("   Verify stability: {}", config.verify_stability());
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(config.input_path())
        .with_context(|| format!("reading {}", config.input_path()))?;
    let input = parse_preferences(&text).context("parsing preferences")?;
    validator::validate(&input).context("validating preferences")?;

    tracing::info!("✅ Input is valid: {} proposers, {} proposees", input.size, input.size);
    Ok(())
}
