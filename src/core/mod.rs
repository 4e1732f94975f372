pub mod cursor;
pub mod engine;
pub mod pipeline;
pub mod preferences;
pub mod runner;
pub mod stability;
pub mod validator;

pub use crate::domain::model::{MatchReport, PreferenceInput};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
