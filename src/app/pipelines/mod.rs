pub mod matching_pipeline;
