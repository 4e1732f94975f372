use crate::adapters::{build_report, parse_preferences, render};
use crate::core::engine::MatchingEngine;
use crate::core::preferences::PreferenceStore;
use crate::core::stability;
use crate::domain::model::{MatchReport, PreferenceInput};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{MatchError, Result};
use std::io::Write;

/// 讀取偏好文字檔、跑 Gale-Shapley、輸出配對結果。
pub struct MatchingPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> MatchingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MatchingPipeline<S, C> {
    async fn extract(&self) -> Result<PreferenceInput> {
        let path = self.config.input_path();
        tracing::debug!("Reading preferences from: {}", path);

        let bytes = self.storage.read_file(path).await?;
        let text = String::from_utf8(bytes).map_err(|e| {
            MatchError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        let input = parse_preferences(&text)?;
        tracing::info!("📥 Loaded preferences for {} matches", input.size);
        Ok(input)
    }

    async fn transform(&self, input: PreferenceInput) -> Result<MatchReport> {
        if input.is_empty() {
            tracing::info!("Nothing to match");
            return Ok(MatchReport::default());
        }

        // 驗證失敗時不會進入引擎
        let store = PreferenceStore::try_from(&input)?;
        let matching = MatchingEngine::new(&store).run()?;

        if self.config.verify_stability() {
            stability::verify(&store, &matching)?;
            tracing::info!("🔍 Verified: no blocking pairs");
        }

        let stats = matching.stats();
        tracing::info!(
            "🤝 Matched {} pairs in {} proposals ({} evictions, {} rejections)",
            matching.size(),
            stats.proposals,
            stats.evictions,
            stats.rejections
        );

        Ok(build_report(&input, &matching))
    }

    async fn load(&self, report: MatchReport) -> Result<String> {
        let rendered = render(&report, self.config.output_format())?;

        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, rendered.as_bytes()).await?;
                tracing::info!("💾 Wrote {} pairs to {}", report.pairings.len(), path);
                Ok(path.to_string())
            }
            None => {
                write_stdout(&rendered)?;
                Ok("stdout".to_string())
            }
        }
    }
}

fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
