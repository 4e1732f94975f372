use crate::core::Pipeline;
use crate::domain::model::MatchStats;
use crate::utils::error::Result;
use std::time::{Duration, Instant};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// N = 0: nothing matched, nothing written.
    Empty,
    Written {
        destination: String,
        pairs: usize,
        stats: MatchStats,
    },
}

pub struct MatchRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MatchRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Extract, transform, load. Any error aborts before the load phase
    /// writes anything.
    pub async fn run(&self) -> Result<RunOutcome> {
        let started = Instant::now();
        tracing::info!("🚀 Starting stable matching run");

        let input = self.pipeline.extract().await?;
        tracing::debug!("Extract finished after {:?}", started.elapsed());

        let report = self.pipeline.transform(input).await?;
        tracing::debug!("Transform finished after {:?}", started.elapsed());

        // N = 0：不輸出也不報錯
        if report.is_empty() {
            log_elapsed(started.elapsed());
            return Ok(RunOutcome::Empty);
        }

        let pairs = report.pairings.len();
        let stats = report.stats;
        let destination = self.pipeline.load(report).await?;

        log_elapsed(started.elapsed());
        Ok(RunOutcome::Written {
            destination,
            pairs,
            stats,
        })
    }
}

fn log_elapsed(elapsed: Duration) {
    tracing::info!("⏱️ Run finished in {:?}", elapsed);
}
