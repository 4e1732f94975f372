pub use crate::app::pipelines::matching_pipeline::MatchingPipeline;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{OutputFormat, Pairing};
    use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
    use crate::utils::error::{MatchError, Result};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.as_bytes().to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| MatchError::InputNotFound {
                path: path.to_string(),
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        output: Option<String>,
        format: OutputFormat,
        verify: bool,
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> &str {
            "prefs.txt"
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn verify_stability(&self) -> bool {
            self.verify
        }
    }

    const EXAMPLE: &str = "3\nA\nB\nC\n1 2 3\n2 1 3\n1 2 3\nX\nY\nZ\n2 1 3\n1 2 3\n1 2 3\n";

    fn pipeline(content: &str, format: OutputFormat) -> MatchingPipeline<MockStorage, TestConfig> {
        MatchingPipeline::new(
            MockStorage::with_file("prefs.txt", content),
            TestConfig {
                output: Some("pairs.out".to_string()),
                format,
                verify: true,
            },
        )
    }

    #[tokio::test]
    async fn test_extract_transform_load() {
        let pipeline = pipeline(EXAMPLE, OutputFormat::Text);

        let input = pipeline.extract().await.unwrap();
        assert_eq!(input.size, 3);

        let report = pipeline.transform(input).await.unwrap();
        assert_eq!(
            report.pairings[1],
            Pairing {
                proposer: "B".to_string(),
                proposee: "Y".to_string()
            }
        );
        assert!(report.stats.proposals <= 9);

        let destination = pipeline.load(report).await.unwrap();
        assert_eq!(destination, "pairs.out");

        let written = pipeline.storage.get_file("pairs.out").await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), "A / X\nB / Y\nC / Z\n");
    }

    #[tokio::test]
    async fn test_validation_failure_stops_before_matching() {
        let duplicate = "2\nA\nB\n1 1\n2 1\nX\nY\n1 2\n2 1\n";
        let pipeline = pipeline(duplicate, OutputFormat::Text);

        let input = pipeline.extract().await.unwrap();
        let err = pipeline.transform(input).await.unwrap_err();
        assert!(matches!(err, MatchError::ValidationError(_)));
        assert!(pipeline.storage.get_file("pairs.out").await.is_none());
    }

    #[tokio::test]
    async fn test_parse_failure_surfaces_in_extract() {
        let pipeline = pipeline("2\nA\nB\n1 x\n", OutputFormat::Text);
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, MatchError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_zero_matches_transforms_to_empty_report() {
        let pipeline = pipeline("0\n", OutputFormat::Json);
        let input = pipeline.extract().await.unwrap();
        let report = pipeline.transform(input).await.unwrap();
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_missing_input() {
        let pipeline = MatchingPipeline::new(
            MockStorage::with_file("other.txt", EXAMPLE),
            TestConfig {
                output: None,
                format: OutputFormat::Text,
                verify: false,
            },
        );
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, MatchError::InputNotFound { .. }));
    }
}
