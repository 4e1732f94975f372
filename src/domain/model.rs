use serde::{Deserialize, Serialize};
use std::fmt;

/// 提議方的識別碼，內部一律 0-based。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProposerId(pub usize);

/// 被提議方的識別碼，內部一律 0-based。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProposeeId(pub usize);

macro_rules! one_based_id {
    ($ty:ident) => {
        impl $ty {
            /// Translates a 1-based index from the text format.
            /// Returns `None` for 0, which has no counterpart.
            pub fn from_one_based(index: usize) -> Option<Self> {
                index.checked_sub(1).map($ty)
            }

            pub fn one_based(self) -> usize {
                self.0 + 1
            }

            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.one_based())
            }
        }
    };
}

one_based_id!(ProposerId);
one_based_id!(ProposeeId);

/// Which set an agent belongs to. Used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Proposer,
    Proposee,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Proposer => f.write_str("proposer"),
            Side::Proposee => f.write_str("proposee"),
        }
    }
}

/// 解析後、尚未驗證的輸入資料。偏好清單保留文字格式的 1-based 整數，
/// 越界或負數要等到驗證階段才會被拒絕。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceInput {
    pub size: usize,
    pub proposer_names: Vec<String>,
    pub proposer_lists: Vec<Vec<i64>>,
    pub proposee_names: Vec<String>,
    /// Most preferred proposer first.
    pub proposee_lists: Vec<Vec<i64>>,
}

impl PreferenceInput {
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<proposer> / <proposee>` 每行一組
    #[default]
    Text,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Every call into the proposal cursor.
    pub proposals: usize,
    /// Proposals accepted by a free proposee.
    pub acceptances: usize,
    /// Proposals that displaced a weaker partner.
    pub evictions: usize,
    pub rejections: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub proposer: String,
    pub proposee: String,
}

/// 渲染前的最終結果，依提議方編號遞增排列。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub pairings: Vec<Pairing>,
    pub stats: MatchStats,
}

impl MatchReport {
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }
}
