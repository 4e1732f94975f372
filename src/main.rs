use clap::Parser;
use stable_match::utils::{logger, validation::Validate};
use stable_match::{CliConfig, LocalStorage, MatchRunner, MatchingPipeline, RunOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting stable-match CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    // 相對路徑都以目前工作目錄為準
    let storage = LocalStorage::new(".".to_string());
    let pipeline = MatchingPipeline::new(storage, config);
    let runner = MatchRunner::new(pipeline);

    match runner.run().await {
        Ok(RunOutcome::Empty) => {
            tracing::info!("✅ No matches requested");
        }
        Ok(RunOutcome::Written {
            destination,
            pairs,
            stats,
        }) => {
            tracing::info!(
                "✅ {} stable pairs written to {} ({} proposals)",
                pairs,
                destination,
                stats.proposals
            );
        }
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
