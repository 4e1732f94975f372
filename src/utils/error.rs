use crate::domain::model::{ProposeeId, ProposerId, Side};
use thiserror::Error;

/// 讀取文字輸入時的結構性錯誤。行號皆為 1-based。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected {expected}, but the input ended")]
    MissingLine { line: usize, expected: String },

    #[error("line {line}: '{value}' is not a valid number of matches")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: preference '{token}' is not in number format")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} preferences, found {found}")]
    WrongTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// 偏好資料不是兩組合法排列時的語意錯誤。`index` 為 1-based。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected {expected} {side} {what}, found {found}")]
    CountMismatch {
        side: Side,
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{side} {index} lists {found} preferences, expected {expected}")]
    WrongLength {
        side: Side,
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("{side} {index} ranks {value}, which is outside 1..={size}")]
    OutOfRange {
        side: Side,
        index: usize,
        value: i64,
        size: usize,
    },

    #[error("{side} {index} ranks {value} more than once")]
    Duplicate { side: Side, index: usize, value: i64 },
}

/// Engine defects. Unreachable on validated input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("proposer {proposer} exhausted its preference list while unmatched")]
    CursorExhausted { proposer: ProposerId },

    #[error("proposer {proposer} is unmatched after the proposal queue drained")]
    Unmatched { proposer: ProposerId },

    #[error("matching is not stable: proposer {proposer} and proposee {proposee} prefer each other")]
    Unstable {
        proposer: ProposerId,
        proposee: ProposeeId,
    },
}

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Internal invariant violated: {0}")]
    InvariantError(#[from] InvariantViolation),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Validation,
    Internal,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::InputNotFound { .. } | MatchError::ParseError(_) => ErrorCategory::Input,
            MatchError::IoError(_) => ErrorCategory::Input,
            MatchError::ValidationError(_) => ErrorCategory::Validation,
            MatchError::InvariantError(_) => ErrorCategory::Internal,
            MatchError::SerializationError(_) | MatchError::CsvError(_) => ErrorCategory::Output,
            MatchError::ConfigError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Validation | ErrorCategory::Output => {
                ErrorSeverity::High
            }
            // 演算法本身的缺陷，不是使用者的錯
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::InputNotFound { path } => format!("{} file not found !!", path),
            MatchError::IoError(e) => format!("Something went wrong while reading input: {}", e),
            MatchError::ParseError(e) => format!("Input data is invalid: {}", e),
            MatchError::ValidationError(e) => format!(
                "Input values are not in a valid format. Preferences should be between 1 and the number of matches and should not repeat ({})",
                e
            ),
            MatchError::InvariantError(e) => format!("Matching failed unexpectedly: {}", e),
            MatchError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            MatchError::CsvError(e) => format!("Could not render CSV output: {}", e),
            MatchError::ConfigError { message } => format!("Configuration problem: {}", message),
            MatchError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting {} = '{}' is invalid: {}", field, value, reason),
            MatchError::MissingConfigError { field } => {
                format!("Setting {} is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check that the input file exists and follows the N / names / preferences layout"
            }
            ErrorCategory::Validation => {
                "Every preference line must be a permutation of 1..N with exactly N entries"
            }
            ErrorCategory::Internal => "This is a bug; please report it together with the input file",
            ErrorCategory::Output => "Check the output path and try another output format",
            ErrorCategory::Configuration => "Run with --help or check the TOML configuration file",
        }
    }

    /// 依嚴重程度決定 process exit code
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
