use crate::domain::model::{MatchReport, OutputFormat, PreferenceInput};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    /// `None` 代表輸出到 stdout。
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn verify_stability(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<PreferenceInput>;
    async fn transform(&self, input: PreferenceInput) -> Result<MatchReport>;
    async fn load(&self, report: MatchReport) -> Result<String>;
}
